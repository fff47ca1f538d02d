// tests/parallel_sum.rs
// Parallel reduction must equal the sequential sum for every worker count and kernel.

use ferrous_bytesum::compute::KernelKind;
use ferrous_bytesum::data::{cyclic_sum, AgeBuffer};
use ferrous_bytesum::parallel::{
    chunk_ranges, chunked_sum, parallel_sum, scoped_sum, sequential_sum, ParallelReducer,
};
use ferrous_bytesum::reduce_opt::ReduceOpt;

#[test]
fn thousand_cyclic_ages() {
    let ages = AgeBuffer::try_cyclic(1000).unwrap();
    assert_eq!(sequential_sum(&ages), 49500);
    for workers in 1..=16 {
        assert_eq!(parallel_sum(&ages, workers, KernelKind::Auto), 49500, "workers={}", workers);
    }
}

#[test]
fn partial_cycle_ages() {
    // 2 complete cycles + 0..50 -> 2 * 4950 + 1225
    let ages = AgeBuffer::try_cyclic(250).unwrap();
    assert_eq!(cyclic_sum(250), 11125);
    for workers in 1..=16 {
        assert_eq!(parallel_sum(&ages, workers, KernelKind::Scalar), 11125);
        assert_eq!(scoped_sum(&ages, workers, KernelKind::Scalar), 11125);
    }
}

#[test]
fn boundaries() {
    for workers in [1, 2, 64] {
        assert_eq!(parallel_sum(&[], workers, KernelKind::Auto), 0);
        assert_eq!(parallel_sum(&[13], workers, KernelKind::Auto), 13);
        assert_eq!(scoped_sum(&[], workers, KernelKind::Auto), 0);
        assert_eq!(scoped_sum(&[13], workers, KernelKind::Auto), 13);
    }
}

#[test]
fn every_worker_count_and_kernel_matches_sequential() {
    let ages = AgeBuffer::try_random(10_007, 3).unwrap();
    let expected = sequential_sum(&ages);

    for kernel in KernelKind::all_available() {
        for workers in 1..=33 {
            assert_eq!(
                parallel_sum(&ages, workers, kernel),
                expected,
                "kernel={} workers={}",
                kernel,
                workers
            );
        }
        assert_eq!(scoped_sum(&ages, 7, kernel), expected, "scoped kernel={}", kernel);
        assert_eq!(chunked_sum(&ages, 1000, kernel), expected, "chunked kernel={}", kernel);
    }
}

#[test]
fn more_workers_than_elements() {
    let ages = [1u8, 2, 3, 4, 5];
    assert_eq!(chunk_ranges(ages.len(), 100).len(), 5);
    assert_eq!(parallel_sum(&ages, 100, KernelKind::Swar), 15);
    assert_eq!(scoped_sum(&ages, 100, KernelKind::Swar), 15);
}

#[test]
fn worker_count_far_above_core_count() {
    // One range per element; threads stay bounded by the core count
    let ones = vec![1u8; 100_000];
    assert_eq!(scoped_sum(&ones, 100_000, KernelKind::Scalar), 100_000);
    assert_eq!(parallel_sum(&ones, 100_000, KernelKind::Scalar), 100_000);

    let ages = AgeBuffer::try_cyclic(250_000).unwrap();
    assert_eq!(scoped_sum(&ages, usize::MAX, KernelKind::Auto), cyclic_sum(250_000));
}

#[test]
fn zero_workers_treated_as_one() {
    let ages = AgeBuffer::try_cyclic(333).unwrap();
    assert_eq!(parallel_sum(&ages, 0, KernelKind::Auto), cyclic_sum(333));
    assert_eq!(scoped_sum(&ages, 0, KernelKind::Auto), cyclic_sum(333));
}

#[test]
fn reducer_with_default_options() {
    let _ = env_logger::builder().is_test(true).try_init();

    let reducer = ParallelReducer::new(&ReduceOpt::default()).unwrap();
    let ages = AgeBuffer::try_cyclic(1_000_003).unwrap();
    let expected = cyclic_sum(1_000_003);

    assert_eq!(reducer.sum(&ages), expected);
    assert_eq!(reducer.sum_chunked(&ages), expected);
    // Idempotent on immutable input
    assert_eq!(reducer.sum(&ages), expected);
}

#[test]
fn single_thread_reducer() {
    let opt = ReduceOpt {
        threads: Some(1),
        kernel: KernelKind::Unrolled16,
        ..Default::default()
    };
    let reducer = ParallelReducer::new(&opt).unwrap();
    assert_eq!(reducer.threads(), 1);
    assert_eq!(reducer.kernel(), KernelKind::Unrolled16);

    let ages = AgeBuffer::try_cyclic(250_000).unwrap();
    assert_eq!(reducer.sum(&ages), cyclic_sum(250_000));
}
