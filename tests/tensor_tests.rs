use aten_lite::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_tensor_walkthrough() {
    let t = Tensor::from_rows([2, 2], vec![vec![1, 2], vec![3, 4]]).unwrap();

    let r = t.reshape([4]).unwrap();
    assert_eq!(r.shape().dims(), &[4]);
    assert_eq!(r.flatten(), vec![1, 2, 3, 4]);

    let other = Tensor::from_rows([2, 2], vec![vec![2, 2], vec![2, 2]]).unwrap();
    let c = t.hadamard_product(&other).unwrap();
    assert_eq!(c.shape().dims(), &[2, 2]);
    assert_eq!(c.flatten(), vec![2, 4, 6, 8]);

    let s = t.index_select(0, &[1, 1]).unwrap();
    assert_eq!(s.to_rows(), Some(vec![vec![3, 4], vec![3, 4]]));
}

#[test]
fn test_construction() {
    assert!(matches!(
        Tensor::from_flat(Vec::<usize>::new(), vec![1]),
        Err(Error::InvalidShape { .. })
    ));
    assert!(Tensor::from_flat([2, 2], vec![1, 2, 3, 4]).is_ok());
    assert!(Tensor::new([5], Vec::<i64>::new()).is_ok());
}

#[test]
fn test_reshape_round_trip_rows() {
    let t = Tensor::from_rows([2, 3], vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    let back = t.reshape([3, 2]).unwrap().reshape([2, 3]).unwrap();
    assert_eq!(back.shape(), t.shape());
    assert_eq!(back.flatten(), t.flatten());
    assert!(back.shares_storage(&t));
}

#[test]
fn test_hadamard_randomized_against_naive() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let rows: usize = rng.gen_range(1..5);
        let cols: usize = rng.gen_range(1..5);
        let a: Vec<Vec<i64>> = (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(-1000..1000)).collect())
            .collect();
        let b: Vec<i64> = (0..rows * cols).map(|_| rng.gen_range(-1000..1000)).collect();

        let expected: Vec<i64> = a.iter().flatten().zip(&b).map(|(x, y)| x * y).collect();

        let ta = Tensor::from_rows([rows, cols], a).unwrap();
        let tb = Tensor::from_flat([rows, cols], b).unwrap();
        assert_eq!(ta.hadamard_product(&tb).unwrap().flatten(), expected);
    }
}

#[test]
fn test_index_select_keeps_shape() {
    let t = Tensor::from_flat([4], vec![10, 20, 30, 40]).unwrap();
    let s = t.index_select(0, &[0, 0, 3]).unwrap();
    assert_eq!(s.flatten(), vec![10, 10, 40]);
    assert_eq!(s.shape().dims(), &[4]);
    assert_eq!(s.numel(), Some(4));
    assert_eq!(s.element_count(), 3);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let t = Tensor::from_rows([2, 2], vec![vec![1, 2], vec![3, 4]]).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    let back: Tensor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rejects_empty_shape() {
    let t = Tensor::from_flat([2], vec![1, 2]).unwrap();
    let mut value = serde_json::to_value(&t).unwrap();
    value["shape"] = serde_json::json!([]);
    let result: std::result::Result<Tensor, _> = serde_json::from_value(value);
    assert!(result.is_err());
}
