//! Sequential identity properties of the holders.

use std::ptr;

use cp_core::Error;
use cp_singleton::{define_singleton, HolderState, InstanceHolder, LockedHolder, Singleton};
use proptest::prelude::*;

define_singleton!(
    /// Shared lookup table used by the tests below.
    pub TABLE: Vec<u32> = (0..64).collect()
);

proptest! {
    #[test]
    fn repeated_calls_return_the_same_singleton(n in 1usize..512) {
        let first = Singleton::get_instance();
        for _ in 0..n {
            prop_assert!(ptr::eq(first, Singleton::get_instance()));
        }
    }

    #[test]
    fn fresh_holder_is_stable_over_any_call_count(n in 1usize..512) {
        let holder = InstanceHolder::new(|| String::from("shared"));
        let first = holder.get_instance();
        for _ in 0..n {
            prop_assert!(ptr::eq(first, holder.get_instance()));
        }
        prop_assert_eq!(holder.state(), HolderState::Initialized);
    }

    #[test]
    fn locked_holder_is_stable_over_any_call_count(n in 1usize..64) {
        let holder = LockedHolder::new(|| 42u64);
        let first = holder.get_instance();
        for _ in 0..n {
            prop_assert!(ptr::eq(first, holder.get_instance()));
        }
    }
}

#[test]
fn declared_singleton_is_built_on_first_use() {
    let table = TABLE.get_instance();
    assert_eq!(table.len(), 64);
    assert_eq!(TABLE.state(), HolderState::Initialized);
    assert!(ptr::eq(table, TABLE.get_instance()));
}

#[test]
fn explicit_init_after_use_keeps_the_original() {
    let table = TABLE.get_instance();
    let err = TABLE.try_init_with(vec![]).unwrap_err();

    assert!(matches!(err, Error::AlreadyInitialized { .. }));
    assert!(ptr::eq(table, TABLE.get_instance()));
    assert_eq!(TABLE.get_instance().len(), 64);
}

#[test]
fn demonstration_scenario_reports_same_instance() {
    let s1 = Singleton::get_instance();
    let s2 = Singleton::get_instance();
    assert!(ptr::eq(s1, s2), "Singleton failed, variables contain different instances.");
}
