#![allow(
    non_upper_case_globals,
    non_camel_case_types,
    non_snake_case,
    dead_code
)]

//! Raw layouts and entry-point signatures of the workflow server client API.
//!
//! Nothing here links against the vendor library; the safe crate resolves
//! each symbol at runtime and casts it to the alias for the loaded revision.

mod consts;
mod functions;
mod objects;
mod types;
mod value;
mod workflow;
mod xml;

pub use consts::*;
pub use functions::*;
pub use objects::*;
pub use types::*;
pub use value::*;
pub use workflow::*;
pub use xml::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn list_is_count_then_pointer() {
        assert_eq!(size_of::<ARNameList>(), 2 * size_of::<usize>());
        assert_eq!(align_of::<ARNameList>(), align_of::<*mut u8>());
        let list = ARList::<u8>::empty();
        assert!(list.is_empty());
        assert!(list.items.is_null());
    }

    #[test]
    fn corrupted_list_has_no_slice() {
        let list = ARList::<u32>::from_raw_parts(std::ptr::null_mut(), 3);
        // SAFETY: the null check runs before any dereference.
        assert!(unsafe { list.as_slice() }.is_none());

        let mut items = [7u32, 8];
        let list = ARList::from_raw_parts(items.as_mut_ptr(), 2);
        // SAFETY: `items` outlives the slice.
        assert_eq!(unsafe { list.as_slice() }, Some(&[7u32, 8][..]));
    }

    #[test]
    fn control_blocks_grow_with_localization() {
        assert!(size_of::<ARControlStruct51>() < size_of::<ARControlStruct>());
        assert_eq!(size_of::<ARNameType>(), AR_MAX_NAME_SIZE + 1);
    }

    #[test]
    fn field_limits_grow_at_75() {
        assert!(size_of::<ARCharLimitsStruct51>() < size_of::<ARCharLimitsStruct>());
        assert!(size_of::<ARFieldLimitStruct51>() <= size_of::<ARFieldLimitStruct>());
        assert!(size_of::<ARTableLimitsStruct51>() < size_of::<ARTableLimitsStruct>());
    }

    #[test]
    fn limit_unions_hold_every_member() {
        for member in [
            size_of::<ARTableLimitsStruct51>(),
            size_of::<ARCurrencyLimitsStruct>(),
            size_of::<ARDisplayLimitsStruct51>(),
            size_of::<ARViewLimitsStruct>(),
            size_of::<ARCharLimitsStruct51>(),
        ] {
            assert!(size_of::<ARFieldLimitUnion51>() >= member);
        }
        for member in [
            size_of::<ARTableLimitsStruct>(),
            size_of::<ARCurrencyLimitsStruct>(),
            size_of::<ARDisplayLimitsStruct>(),
            size_of::<ARCharLimitsStruct>(),
        ] {
            assert!(size_of::<ARFieldLimitUnion>() >= member);
        }
        // The table member dominates both revisions.
        assert_eq!(size_of::<ARFieldLimitUnion51>(), size_of::<ARTableLimitsStruct51>());
        assert_eq!(size_of::<ARFieldLimitUnion>(), size_of::<ARTableLimitsStruct>());
    }

    #[test]
    fn value_union_holds_a_double() {
        assert!(size_of::<ARValueUnion>() >= size_of::<f64>());
        let v = ARValueStruct::null();
        assert_eq!(v.dataType, AR_DATA_TYPE_NULL);
    }

    #[test]
    fn zeroed_outputs_are_empty() {
        let status = ARStatusList::zeroed();
        assert_eq!(status.numItems, 0);
        let name = <ARNameType as Zeroable>::zeroed();
        assert!(name.iter().all(|&c| c == 0));
    }

    #[test]
    fn reserved_action_member_dominates() {
        assert!(size_of::<ARActiveLinkActionUnion>() >= size_of::<ARActionReserved>());
        assert!(size_of::<ARFilterActionUnion>() >= size_of::<ARActionReserved>());
    }
}
