//! Weights for pallet-sale-treasury.
//!
//! Hand-set until benchmarks are run against reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::{constants::RocksDbWeight, Weight}};

pub trait WeightInfo {
    fn deposit() -> Weight;
    fn withdraw() -> Weight;
    fn reconcile() -> Weight;
}

/// Weights derived from the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Storage: Locked, TrackedBalance, LedgerLength, Ledger, System::Account (x2)
    fn deposit() -> Weight {
        Weight::from_parts(45_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(6))
    }
    // Storage: Locked, roles, TrackedBalance, LedgerLength, Ledger, System::Account (x2)
    // plus the reconciliation entry
    fn withdraw() -> Weight {
        Weight::from_parts(58_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(8))
    }
    // Storage: Locked, System::Account, TrackedBalance, LedgerLength, Ledger
    fn reconcile() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(5))
    }
}

impl WeightInfo for () {
    fn deposit() -> Weight {
        Weight::from_parts(45_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(5))
            .saturating_add(RocksDbWeight::get().writes(6))
    }
    fn withdraw() -> Weight {
        Weight::from_parts(58_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(6))
            .saturating_add(RocksDbWeight::get().writes(8))
    }
    fn reconcile() -> Weight {
        Weight::from_parts(24_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(5))
    }
}
