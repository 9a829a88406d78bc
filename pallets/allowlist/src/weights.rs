//! Weights for pallet-allowlist.
//!
//! Hand-set until benchmarks are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::{constants::RocksDbWeight, Weight}};

pub trait WeightInfo {
    fn register() -> Weight;
    fn admin_allow() -> Weight;
    fn blacklist() -> Weight;
    fn unblacklist() -> Weight;
    fn set_fee() -> Weight;
}

/// Weights derived from the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Includes the forward into the treasury
    fn register() -> Weight {
        Weight::from_parts(58_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(7))
            .saturating_add(T::DbWeight::get().writes(7))
    }
    fn admin_allow() -> Weight {
        Weight::from_parts(14_000_000, 3_520)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn blacklist() -> Weight {
        Weight::from_parts(14_000_000, 3_520)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unblacklist() -> Weight {
        Weight::from_parts(14_000_000, 3_520)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn set_fee() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

impl WeightInfo for () {
    fn register() -> Weight {
        Weight::from_parts(58_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(7))
            .saturating_add(RocksDbWeight::get().writes(7))
    }
    fn admin_allow() -> Weight {
        Weight::from_parts(14_000_000, 3_520)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn blacklist() -> Weight {
        Weight::from_parts(14_000_000, 3_520)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn unblacklist() -> Weight {
        Weight::from_parts(14_000_000, 3_520)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn set_fee() -> Weight {
        Weight::from_parts(9_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
}
