//! Weights for pallet-custodian.
//!
//! Hand-set until benchmarks are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::{constants::RocksDbWeight, Weight}};

pub trait WeightInfo {
    fn bind_ledger() -> Weight;
    fn freeze() -> Weight;
    fn unfreeze() -> Weight;
}

/// Weights derived from the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn bind_ledger() -> Weight {
        Weight::from_parts(11_000_000, 1_600)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Reads the ledger's ownership and custodian pointer
    fn freeze() -> Weight {
        Weight::from_parts(19_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unfreeze() -> Weight {
        Weight::from_parts(17_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

impl WeightInfo for () {
    fn bind_ledger() -> Weight {
        Weight::from_parts(11_000_000, 1_600)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn freeze() -> Weight {
        Weight::from_parts(19_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(5))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn unfreeze() -> Weight {
        Weight::from_parts(17_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
}
