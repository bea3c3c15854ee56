#![no_main]

use bytevec::{ByteVec, GrowthPolicy, VecConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let Some((&head, ops)) = data.split_first() else {
        return;
    };

    // Element size 1..=8, policy from the high bit
    let element_size = (head & 0x07) as usize + 1;
    let growth = if head & 0x80 != 0 {
        GrowthPolicy::Doubling
    } else {
        GrowthPolicy::Incremental
    };
    let config = VecConfig::new(0, element_size)
        .unwrap()
        .with_growth_policy(growth);
    let mut v = ByteVec::from_config(config).unwrap();
    let mut model: Vec<u8> = Vec::new();

    for &op in ops {
        match op % 4 {
            // Reserve small amounts
            0 => {
                let target = (op / 4) as usize;
                let before = v.capacity();
                v.reserve(target).unwrap();
                assert!(v.capacity() >= target.max(before));
            }
            1 => {
                let amount = (op / 4) as usize % 8;
                let before = v.capacity();
                v.reserve_grow(amount).unwrap();
                assert_eq!(v.capacity(), before + amount);
            }
            // Mismatched sizes must be rejected
            2 if element_size > 1 => {
                assert!(v.try_push(&[op]).is_err());
            }
            _ => {
                let value = vec![op; element_size];
                v.push(&value).unwrap();
                model.extend_from_slice(&value);
            }
        }

        // Verify: size <= capacity, content matches the model
        assert!(v.len() <= v.capacity());
        assert_eq!(v.has_allocation(), v.capacity() > 0);
        assert_eq!(v.as_bytes(), model.as_slice());
    }
});
