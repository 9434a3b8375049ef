use kira_radix_sort::*;
use proptest::prelude::*;

/// Keys spanning short and very long digit counts.
fn keys() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(
        prop_oneof![0u64..10, 0u64..100_000, any::<u64>()],
        0..200,
    )
}

fn divisor() -> impl Strategy<Value = u64> {
    (0u32..=19).prop_map(|e| 10u64.pow(e))
}

proptest! {
    #[test]
    fn prop_sorted_permutation(mut v in keys()) {
        let mut expected = v.clone();
        expected.sort_unstable();

        let report = radix_sort(&mut v);
        prop_assert_eq!(&v, &expected);

        let max = expected.last().copied();
        prop_assert_eq!(report.max, max);
        prop_assert_eq!(report.passes, max.map(decimal_digits).unwrap_or(0));
    }

    #[test]
    fn prop_pass_is_stable(v in keys(), d in divisor()) {
        // std's sort_by_key is stable, so it is the reference ordering.
        let mut expected = v.clone();
        expected.sort_by_key(|&k| digit_at(k, d));

        let mut got = v.clone();
        counting_sort_pass(&mut got, d);
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_idempotent(mut v in keys()) {
        radix_sort(&mut v);
        let once = v.clone();
        radix_sort(&mut v);
        prop_assert_eq!(v, once);
    }

    #[test]
    fn prop_snapshots_sorted_by_suffix(mut v in keys()) {
        // After the pass at divisor d, keys are ordered by `k % (10 * d)`.
        let mut ok = true;
        radix_sort_observed(&mut v, |ev| {
            let m = ev.divisor.checked_mul(10);
            let suffix = |k: u64| m.map_or(k, |m| k % m);
            ok &= ev.snapshot.windows(2).all(|w| suffix(w[0]) <= suffix(w[1]));
        });
        prop_assert!(ok);
    }
}
