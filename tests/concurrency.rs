//! 상태 없는 평가: 여러 스레드에서 동시에 호출해도 결과가 같다

use special_minimax::{evaluate, FunctionKind};
use std::thread;
use test_log::test;

#[test]
fn parallel_evaluation_is_deterministic() {
    let inputs: Vec<f64> = (0..2000).map(|i| -50.0 + 0.05 * i as f64).collect();
    let serial: Vec<Vec<u64>> = FunctionKind::ALL
        .iter()
        .map(|&kind| inputs.iter().map(|&x| evaluate(kind, x).to_bits()).collect())
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = FunctionKind::ALL
            .iter()
            .map(|&kind| {
                let inputs = &inputs;
                scope.spawn(move || {
                    inputs
                        .iter()
                        .map(|&x| evaluate(kind, x).to_bits())
                        .collect::<Vec<u64>>()
                })
            })
            .collect();
        for (handle, expected) in handles.into_iter().zip(&serial) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
