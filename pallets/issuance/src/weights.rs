//! Weights for pallet-issuance.
//!
//! Hand-set until benchmarks are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::{constants::RocksDbWeight, Weight}};

pub trait WeightInfo {
    fn buy() -> Weight;
    fn mint() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn initialize_custodian() -> Weight;
}

/// Weights derived from the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Includes the treasury forward
    fn buy() -> Weight {
        Weight::from_parts(95_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(12))
            .saturating_add(T::DbWeight::get().writes(11))
    }
    fn mint() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn pause() -> Weight {
        Weight::from_parts(15_000_000, 1_600)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn unpause() -> Weight {
        Weight::from_parts(15_000_000, 1_600)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn initialize_custodian() -> Weight {
        Weight::from_parts(16_000_000, 1_600)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
}

impl WeightInfo for () {
    fn buy() -> Weight {
        Weight::from_parts(95_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(12))
            .saturating_add(RocksDbWeight::get().writes(11))
    }
    fn mint() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
    fn pause() -> Weight {
        Weight::from_parts(15_000_000, 1_600)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn unpause() -> Weight {
        Weight::from_parts(15_000_000, 1_600)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn initialize_custodian() -> Weight {
        Weight::from_parts(16_000_000, 1_600)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
}
