#![no_main]

use arbitrary::Arbitrary;
use cflow_core::palette::ItemHint;
use cflow_runtime::{Coverflow, CoverflowConfig, Direction, RecordingHost};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Next,
    Previous,
    By(i64),
    To(u8),
    First,
    Last,
    Random,
    Tick(u8),
    Resize(u8),
    ToggleWrap,
}

#[derive(Debug, Arbitrary)]
struct Input {
    count: u8,
    wrap: bool,
    seed: u64,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut config = CoverflowConfig::default();
    config.navigation.wrap_navigation = input.wrap;
    let hints = vec![ItemHint::default(); usize::from(input.count % 64)];
    let Ok(cf) = Coverflow::new(config, hints, RecordingHost::new()) else {
        return;
    };
    let mut cf = cf.with_seed(input.seed);
    let mut wrap = input.wrap;

    for op in input.ops.iter().take(256) {
        match *op {
            Op::Next => {
                cf.navigate(Direction::Next);
            }
            Op::Previous => {
                cf.navigate(Direction::Previous);
            }
            Op::By(delta) => {
                cf.navigate_by(delta);
            }
            Op::To(i) => {
                cf.navigate_to(usize::from(i));
            }
            Op::First => {
                cf.navigate_first();
            }
            Op::Last => {
                cf.navigate_last();
            }
            Op::Random => {
                cf.navigate_random();
            }
            Op::Tick(n) => {
                for _ in 0..n {
                    cf.tick();
                }
            }
            Op::Resize(n) => cf.set_items(vec![ItemHint::default(); usize::from(n % 64)]),
            Op::ToggleWrap => {
                wrap = !wrap;
                cf.set_wrap_navigation(wrap);
            }
        }

        // Post-conditions that must always hold:
        let count = cf.items().len();
        let sel = *cf.selection();
        if count > 0 {
            assert!(sel.target_index < count, "target OOB");
            assert!(sel.current_index < count, "current OOB");
        }
        for item in cf.items() {
            assert!(item.current.scale.is_finite(), "non-finite scale");
            assert!(item.current.position.x.is_finite(), "non-finite x");
        }
    }

    cf.run_until_settled(10_000);
    assert!(cf.is_settled(), "engine never settled");
    let sel = *cf.selection();
    assert_eq!(sel.current_index, sel.target_index);
});
