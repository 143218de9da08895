#![no_main]

use cflow_runtime::CoverflowConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Whatever parses must also validate.
    if let Ok(config) = CoverflowConfig::from_toml_str(text) {
        assert!(config.validate().is_empty());
    }
    if let Ok(config) = CoverflowConfig::from_json_str(text) {
        assert!(config.validate().is_empty());
    }
});
