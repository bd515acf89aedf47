use bit_basis::{
    bmask, distance, flip, invorder, itercontrol, matches, reflect_bits, reorder, reorder_lazy, reorder_unchecked,
    swap_bits, take_bit, truncate_bits, BitString,
};
use rand::seq::SliceRandom;
use rand::Rng;

#[test]
fn controlled_iteration_agrees_with_filtering() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let total_bits = rng.gen_range(1..=12);
        let mut positions: Vec<usize> = (1..=total_bits).collect();
        positions.shuffle(&mut rng);
        positions.truncate(rng.gen_range(0..=total_bits));
        let values: Vec<u64> = positions.iter().map(|_| rng.gen_range(0..=1)).collect();

        let it = itercontrol(total_bits, &positions, &values).expect("valid control set");
        let expected: Vec<u64> = (0..1u64 << total_bits)
            .filter(|&x| positions.iter().zip(&values).all(|(&p, &v)| take_bit(x, p) == v))
            .collect();

        assert_eq!(it.len() as usize, expected.len());
        assert_eq!(it.iter().collect::<Vec<u64>>(), expected);

        let mut collected = Vec::new();
        it.for_each(|x| collected.push(x));
        assert_eq!(collected, expected);
    }
}

#[test]
fn controlled_elements_match_their_mask() {
    let positions = vec![2, 3, 7];
    let values = vec![1, 0, 1];
    let mask = bmask(&positions);
    let target = bmask(&[2, 7]);
    let it = itercontrol(9, &positions, &values).unwrap();
    for index in &it {
        assert!(matches(index, mask, target));
    }
}

#[test]
fn reorder_round_trip_with_random_permutations() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let groups = rng.gen_range(1..=10);
        let mut orders: Vec<usize> = (1..=groups).collect();
        orders.shuffle(&mut rng);
        let mut inverse = vec![0usize; groups];
        for (i, &o) in orders.iter().enumerate() {
            inverse[o - 1] = i + 1;
        }

        let data: Vec<u64> = (0..1u64 << groups).map(|_| rng.gen()).collect();
        let there = reorder(&data, &orders).expect("valid permutation");
        let back = reorder(&there, &inverse).expect("valid inverse");
        assert_eq!(back, data, "round trip failed for orders {:?}", orders);
    }
}

#[test]
fn reorder_unchecked_agrees_with_checked() {
    let orders = vec![4, 2, 5, 1, 3];
    let data: Vec<u32> = (0..32).map(|x| x * 3).collect();
    let checked = reorder(&data, &orders).unwrap();
    let unchecked = unsafe { reorder_unchecked(&data, &orders) };
    assert_eq!(checked, unchecked);
}

#[test]
fn lazy_reorder_scatters_like_eager() {
    let orders = vec![3, 1, 2];
    let data: Vec<u64> = (0..8).map(|x| 100 + x).collect();
    let eager = reorder(&data, &orders).unwrap();

    let mut scattered = vec![0u64; data.len()];
    for (source, destination) in reorder_lazy(&orders).unwrap().iter().enumerate() {
        scattered[destination as usize] = data[source];
    }
    assert_eq!(scattered, eager);
}

#[test]
fn invorder_reflects_every_index() {
    let groups = 6;
    let data: Vec<u64> = (0..1u64 << groups).collect();
    let inverted = invorder(&data).unwrap();
    for (index, &entry) in inverted.iter().enumerate() {
        assert_eq!(entry, reflect_bits(groups, index as u64));
    }
    assert_eq!(invorder(&inverted).unwrap(), data);
}

#[test]
fn mask_laws_hold_on_random_inputs() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let x: u64 = rng.gen();
        let y: u64 = rng.gen();
        let m: u64 = rng.gen();
        assert_eq!(flip(flip(x, m), m), x);
        assert_eq!(distance(x, x), 0);
        assert_eq!(distance(x, y), distance(y, x));
        let (i, j) = (rng.gen_range(1..=64), rng.gen_range(1..=64));
        assert_eq!(swap_bits(swap_bits(x, i, j), i, j), x);
        let n = rng.gen_range(0..=64);
        assert_eq!(reflect_bits(n, reflect_bits(n, truncate_bits(x, n))), truncate_bits(x, n));
    }
}

#[test]
fn bit_string_readouts_are_consistent() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let len = rng.gen_range(1..=32);
        let value = rng.gen::<u64>() & ((1u64 << len) - 1);
        let b = BitString::new(value, len).unwrap();
        assert_eq!(b.to_int(), value);
        assert_eq!(b.to_int_reflected(), reflect_bits(len, value));
        assert_eq!(b.to_float_reflected(), value as f64 / (1u64 << len) as f64);
        assert_eq!(b.to_float(), b.to_int_reflected() as f64 / (1u64 << len) as f64);
        for position in 1..=len {
            assert_eq!(b.bit(position), take_bit(value, position) == 1);
        }
    }
}
