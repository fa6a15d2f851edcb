use collatz_viz::*;
use num_bigint::BigUint;
use num_traits::One;

/// 多倍長版と u64 版の軌道が一致するか検証するヘルパー
fn verify_big_matches_u64(n: u64) {
    let small = trajectory(&n, DEFAULT_MAX_STEPS).unwrap();
    let big = trajectory(&BigUint::from(n), DEFAULT_MAX_STEPS).unwrap();
    assert_eq!(small.len(), big.len(), "length mismatch for n={}", n);
    for (a, b) in small.iter().zip(big.iter()) {
        assert_eq!(BigUint::from(*a), *b, "value mismatch for n={}", n);
    }
}

#[test]
fn test_biguint_matches_u64() {
    for n in [1u64, 2, 3, 6, 27, 97, 871, 6171, 77031, 837799] {
        verify_big_matches_u64(n);
    }
}

/// 10^7 未満で最長の 8400511 (685 ステップ)
#[test]
fn test_longest_below_ten_million() {
    let mut engine = SequenceEngine::<u64>::new();
    let seq = engine.compute(8_400_511).unwrap();
    assert_eq!(seq.iterations(), 685);
    assert_eq!(*seq.values().last().unwrap(), 1);
}

/// 10^6 未満で最長の 837799 (524 ステップ)
#[test]
fn test_longest_below_one_million() {
    let mut engine = SequenceEngine::<u64>::new();
    assert_eq!(engine.compute(837_799).unwrap().iterations(), 524);
}

/// 2^100 は 100 回の半減で 1
#[test]
fn test_biguint_power_of_two() {
    let n = BigUint::one() << 100u32;
    let mut engine = SequenceEngine::<BigUint>::new();
    let seq = engine.compute(n.clone()).unwrap();
    assert_eq!(seq.iterations(), 100);
    assert_eq!(*seq.peak(), n);
}

/// u64 では溢れるが BigUint なら最後まで計算できる
#[test]
fn test_overflow_u64_but_not_biguint() {
    let n = u64::MAX;
    let mut small = SequenceEngine::<u64>::new();
    assert!(matches!(small.compute(n), Err(EngineError::Overflow { step: 1, .. })));

    let mut big = SequenceEngine::<BigUint>::new();
    let seq = big.compute(BigUint::from(n)).unwrap();
    assert!(seq.peak() > &BigUint::from(u64::MAX));
    assert!(seq.values().last().unwrap().is_one());
}

#[test]
fn test_u128_range() {
    let mut engine = SequenceEngine::<u128>::new();
    let rows = engine.iteration_counts(1, 10).unwrap();
    let counts: Vec<usize> = rows.iter().map(|r| r.iterations).collect();
    assert_eq!(counts, vec![0, 1, 7, 2, 5, 8, 16, 3, 19, 6]);
}

#[test]
#[ignore] // 10^6 個の区間、--ignored で実行
fn test_range_one_million() {
    let mut engine = SequenceEngine::<u64>::new();
    let rows = engine.iteration_counts(1, 1_000_000).unwrap();
    assert_eq!(rows.len(), 1_000_000);
    let longest = rows.iter().max_by_key(|r| r.iterations).unwrap();
    assert_eq!(longest.number, 837_799);
    assert_eq!(longest.iterations, 524);
}
