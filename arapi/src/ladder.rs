//! The revision ladder and the per-entry-point dispatch table.
//!
//! Every entry point lists the revisions at which its native signature
//! changed. When a library is loaded the table keeps, for each entry point,
//! the newest shape not newer than the library's revision and resolves its
//! symbol once. Calls then branch on [`Callee::shape`].

use std::fmt;

use crate::error::{Error, Result};
use crate::library::{SymbolAddr, SymbolSource};
use crate::version::ApiVersion;

/// A point on the ladder where at least one structure or signature changed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize)]
pub enum Revision {
    V5_1,
    V6_0,
    V6_3,
    V7_0,
    V7_1,
    V7_5,
    V7_6_03,
    V7_6_04,
    V8_0,
    V8_1,
}

impl Revision {
    pub const ALL: [Revision; 10] = [
        Revision::V5_1,
        Revision::V6_0,
        Revision::V6_3,
        Revision::V7_0,
        Revision::V7_1,
        Revision::V7_5,
        Revision::V7_6_03,
        Revision::V7_6_04,
        Revision::V8_0,
        Revision::V8_1,
    ];

    pub const OLDEST: Revision = Revision::V5_1;
    pub const NEWEST: Revision = Revision::V8_1;

    pub const fn min_version(self) -> ApiVersion {
        match self {
            Revision::V5_1 => ApiVersion::new(5, 1, 0),
            Revision::V6_0 => ApiVersion::new(6, 0, 0),
            Revision::V6_3 => ApiVersion::new(6, 3, 0),
            Revision::V7_0 => ApiVersion::new(7, 0, 0),
            Revision::V7_1 => ApiVersion::new(7, 1, 0),
            Revision::V7_5 => ApiVersion::new(7, 5, 0),
            Revision::V7_6_03 => ApiVersion::new(7, 6, 3),
            Revision::V7_6_04 => ApiVersion::new(7, 6, 4),
            Revision::V8_0 => ApiVersion::new(8, 0, 0),
            Revision::V8_1 => ApiVersion::new(8, 1, 0),
        }
    }

    /// The most derived revision whose minimum version is `<= version`.
    ///
    /// Versions newer than the newest modeled revision are served by it.
    pub fn for_version(version: ApiVersion) -> Result<Revision> {
        if Self::beyond_newest(version) {
            log::info!(
                "API version {version} is newer than {}, using the {} shapes",
                Self::NEWEST,
                Self::NEWEST
            );
        }
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|r| r.min_version() <= version)
            .ok_or(Error::UnsupportedVersion(version))
    }

    /// Whether `version` is a later release than the newest revision.
    /// Patch releases of that revision are not.
    fn beyond_newest(version: ApiVersion) -> bool {
        let newest = Self::NEWEST.min_version();
        (version.major(), version.minor()) > (newest.major(), newest.minor())
    }

    /// Whether this library uses the extended control block and
    /// localization layout.
    pub const fn extended_control(self) -> bool {
        self as u8 >= Revision::V7_0 as u8
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.min_version().fmt(f)
    }
}

macro_rules! entry_points {
    ($( $name:ident = $symbol:literal [$($rev:ident),*] ),* $(,)?) => {
        /// A native entry point of the client API.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum EntryPoint {
            $($name),*
        }

        impl EntryPoint {
            pub const ALL: &'static [EntryPoint] = &[$(EntryPoint::$name),*];

            /// Exported symbol name.
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(EntryPoint::$name => $symbol),*
                }
            }

            /// Revisions at which the signature changed, oldest first. The
            /// first element introduced the entry point; an empty list marks
            /// an entry point this binding does not implement.
            pub const fn shapes(self) -> &'static [Revision] {
                match self {
                    $(EntryPoint::$name => &[$(Revision::$rev),*]),*
                }
            }
        }
    };
}

entry_points! {
    Initialization = "ARInitialization" [V5_1],
    Termination = "ARTermination" [V5_1],
    VerifyUser = "ARVerifyUser" [V5_1],
    GetListServer = "ARGetListServer" [V5_1],
    SetServerPort = "ARSetServerPort" [V5_1],
    LoadQualifier = "ARLoadARQualifierStruct" [V5_1],
    DecodeQualifier = "ARDecodeARQualifierStruct" [V5_1],

    CreateSchema = "ARCreateSchema" [V5_1, V6_0, V7_1],
    GetSchema = "ARGetSchema" [V5_1, V6_0, V7_1],
    SetSchema = "ARSetSchema" [V5_1, V6_0, V7_1],
    DeleteSchema = "ARDeleteSchema" [V5_1],
    GetListSchema = "ARGetListSchema" [V5_1, V7_0],
    GetMultipleSchemas = "ARGetMultipleSchemas" [V6_3, V7_1],
    GetListExtSchemaCandidates = "ARGetListExtSchemaCandidates" [],

    CreateField = "ARCreateField" [V5_1, V7_0, V7_5],
    GetField = "ARGetField" [V5_1, V7_0, V7_5],
    SetField = "ARSetField" [V5_1, V7_0, V7_5, V7_6_04],
    DeleteField = "ARDeleteField" [V5_1],
    GetListField = "ARGetListField" [V5_1, V7_0],
    GetMultipleFields = "ARGetMultipleFields" [V5_1, V7_0, V7_5],
    GetMultipleExtFieldCandidates = "ARGetMultipleExtFieldCandidates" [],

    CreateActiveLink = "ARCreateActiveLink" [V5_1, V6_3, V7_6_03],
    GetActiveLink = "ARGetActiveLink" [V5_1, V6_3, V7_6_03],
    SetActiveLink = "ARSetActiveLink" [V5_1, V6_3, V7_6_03],
    DeleteActiveLink = "ARDeleteActiveLink" [V5_1],
    GetListActiveLink = "ARGetListActiveLink" [V5_1, V6_3],
    GetMultipleActiveLinks = "ARGetMultipleActiveLinks" [V6_3, V7_6_03],

    CreateFilter = "ARCreateFilter" [V5_1, V6_3, V7_1],
    GetFilter = "ARGetFilter" [V5_1, V6_3, V7_1],
    SetFilter = "ARSetFilter" [V5_1, V6_3, V7_1],
    DeleteFilter = "ARDeleteFilter" [V5_1],
    GetListFilter = "ARGetListFilter" [V5_1, V6_3],
    GetMultipleFilters = "ARGetMultipleFilters" [V6_3, V7_1],

    CreateEscalation = "ARCreateEscalation" [V5_1, V6_3, V8_1],
    GetEscalation = "ARGetEscalation" [V5_1, V6_3, V8_1],
    SetEscalation = "ARSetEscalation" [V5_1, V6_3, V8_1],
    DeleteEscalation = "ARDeleteEscalation" [V5_1],
    GetListEscalation = "ARGetListEscalation" [V5_1, V6_3],
    GetMultipleEscalations = "ARGetMultipleEscalations" [V6_3, V8_1],

    CreateContainer = "ARCreateContainer" [V5_1, V8_0],
    GetContainer = "ARGetContainer" [V5_1, V8_0],
    SetContainer = "ARSetContainer" [V5_1, V8_0],
    DeleteContainer = "ARDeleteContainer" [V5_1],
    GetListContainer = "ARGetListContainer" [V5_1, V8_0],
    GetMultipleContainers = "ARGetMultipleContainers" [V6_3, V8_0],

    CreateVui = "ARCreateVUI" [V5_1, V6_3],
    GetVui = "ARGetVUI" [V5_1, V6_3],
    SetVui = "ARSetVUI" [V5_1, V6_3],
    DeleteVui = "ARDeleteVUI" [V5_1],
    GetListVui = "ARGetListVUI" [V5_1],
    GetMultipleVuis = "ARGetMultipleVUIs" [V6_3],

    CreateCharMenu = "ARCreateCharMenu" [V5_1, V6_3],
    GetCharMenu = "ARGetCharMenu" [V5_1, V6_3],
    SetCharMenu = "ARSetCharMenu" [V5_1, V6_3],
    DeleteCharMenu = "ARDeleteCharMenu" [V5_1],
    GetListCharMenu = "ARGetListCharMenu" [V5_1, V6_3],
    GetMultipleCharMenus = "ARGetMultipleCharMenus" [V6_3],

    CreateImage = "ARCreateImage" [V7_5],
    GetImage = "ARGetImage" [V7_5],
    SetImage = "ARSetImage" [V7_5],
    DeleteImage = "ARDeleteImage" [V7_5],
    GetListImage = "ARGetListImage" [V7_5],
    GetMultipleImages = "ARGetMultipleImages" [V7_5],

    CreateEntry = "ARCreateEntry" [V5_1],
    GetEntry = "ARGetEntry" [V5_1],
    SetEntry = "ARSetEntry" [V5_1],
    DeleteEntry = "ARDeleteEntry" [V5_1],
    GetListEntry = "ARGetListEntry" [V5_1, V7_0],
    GetMultipleEntries = "ARGetMultipleEntries" [V5_1],

    ParseXmlDocument = "ARParseXMLDocument" [V6_3],
    GetSchemaFromXml = "ARGetSchemaFromXML" [V6_3, V7_1],
    SetSchemaToXml = "ARSetSchemaToXML" [V6_3, V7_1],
    GetActiveLinkFromXml = "ARGetActiveLinkFromXML" [V6_3, V7_6_03],
    SetActiveLinkToXml = "ARSetActiveLinkToXML" [V6_3, V7_6_03],
    GetFilterFromXml = "ARGetFilterFromXML" [V6_3, V7_1],
    SetFilterToXml = "ARSetFilterToXML" [V6_3, V7_1],
    GetEscalationFromXml = "ARGetEscalationFromXML" [V6_3, V8_1],
    SetEscalationToXml = "ARSetEscalationToXML" [V6_3, V8_1],
    GetContainerFromXml = "ARGetContainerFromXML" [V6_3],
    SetContainerToXml = "ARSetContainerToXML" [V6_3],
    GetMenuFromXml = "ARGetMenuFromXML" [V6_3],
    SetMenuToXml = "ARSetMenuToXML" [V6_3],
    GetImageFromXml = "ARGetImageFromXML" [V7_5],
    SetImageToXml = "ARSetImageToXML" [V7_5],
}

impl EntryPoint {
    /// Revision that introduced the entry point, `None` for documented gaps.
    pub fn since(self) -> Option<Revision> {
        self.shapes().first().copied()
    }

    /// The shape a library at `revision` exposes, if any.
    pub fn shape_for(self, revision: Revision) -> Option<Revision> {
        self.shapes().iter().rev().copied().find(|s| *s <= revision)
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A resolved entry point, ready to be cast to the signature of its shape.
#[derive(Clone, Copy, Debug)]
pub struct Callee {
    entry: EntryPoint,
    addr: SymbolAddr,
    shape: Revision,
}

impl Callee {
    pub fn entry(&self) -> EntryPoint {
        self.entry
    }

    /// The revision whose signature this symbol has.
    pub fn shape(&self) -> Revision {
        self.shape
    }

    /// Reinterpret the symbol as a function pointer.
    ///
    /// # Safety
    ///
    /// `F` must be the `unsafe extern "C" fn` alias matching
    /// [`shape`](Self::shape) for this entry point.
    pub(crate) unsafe fn cast<F: Copy>(&self) -> F {
        const { assert!(size_of::<F>() == size_of::<*const std::ffi::c_void>()) };
        let ptr = self.addr.as_ptr();
        // SAFETY: F is a function pointer of the same width; the caller
        // guarantees the signature.
        unsafe { std::mem::transmute_copy::<*const std::ffi::c_void, F>(&ptr) }
    }
}

#[derive(Clone, Copy, Debug)]
enum Slot {
    Gap,
    NotIntroduced(Revision),
    Missing,
    Ready(Callee),
}

/// Entry points resolved for one library revision.
pub struct DispatchTable {
    revision: Revision,
    slots: Vec<Slot>,
}

impl DispatchTable {
    pub fn build(revision: Revision, source: &dyn SymbolSource) -> Self {
        let mut ready = 0usize;
        let slots: Vec<Slot> = EntryPoint::ALL
            .iter()
            .map(|&entry| {
                let Some(since) = entry.since() else {
                    return Slot::Gap;
                };
                let Some(shape) = entry.shape_for(revision) else {
                    return Slot::NotIntroduced(since);
                };
                match source.lookup(entry.symbol()) {
                    Some(addr) => {
                        ready += 1;
                        Slot::Ready(Callee { entry, addr, shape })
                    }
                    None => {
                        log::debug!("{} not exported by {}", entry.symbol(), source.name());
                        Slot::Missing
                    }
                }
            })
            .collect();
        log::debug!(
            "dispatch table for {revision}: {ready} of {} entry points resolved",
            slots.len()
        );
        Self { revision, slots }
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn callee(&self, entry: EntryPoint) -> Result<Callee> {
        match self.slots[entry as usize] {
            Slot::Ready(callee) => Ok(callee),
            Slot::Gap => Err(Error::NotImplemented(entry)),
            Slot::NotIntroduced(since) => Err(Error::NotSupported {
                entry,
                since,
                revision: self.revision,
            }),
            Slot::Missing => Err(Error::MissingSymbol(entry.symbol())),
        }
    }

    pub fn supports(&self, entry: EntryPoint) -> bool {
        matches!(self.slots[entry as usize], Slot::Ready(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_ordered() {
        for pair in Revision::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].min_version() < pair[1].min_version());
        }
    }

    #[test]
    fn most_derived_revision_wins() {
        let r = |a, b, c| Revision::for_version(ApiVersion::new(a, b, c)).unwrap();
        assert_eq!(r(5, 1, 0), Revision::V5_1);
        assert_eq!(r(5, 1, 2), Revision::V5_1);
        assert_eq!(r(6, 3, 0), Revision::V6_3);
        assert_eq!(r(7, 6, 2), Revision::V7_5);
        assert_eq!(r(7, 6, 3), Revision::V7_6_03);
        assert_eq!(r(7, 6, 4), Revision::V7_6_04);
        assert_eq!(r(9, 0, 0), Revision::V8_1);
    }

    #[test]
    fn patch_releases_of_the_newest_revision_are_not_newer() {
        assert!(!Revision::beyond_newest(ApiVersion::new(8, 1, 0)));
        assert!(!Revision::beyond_newest(ApiVersion::new(8, 1, 2)));
        assert!(!Revision::beyond_newest(ApiVersion::new(7, 6, 4)));
        assert!(Revision::beyond_newest(ApiVersion::new(8, 2, 0)));
        assert!(Revision::beyond_newest(ApiVersion::new(9, 0, 0)));
        assert_eq!(Revision::for_version(ApiVersion::new(8, 1, 2)).unwrap(), Revision::V8_1);
    }

    #[test]
    fn too_old_is_rejected() {
        assert!(matches!(
            Revision::for_version(ApiVersion::new(4, 5, 0)),
            Err(Error::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn shapes_are_sorted_and_picked_from_the_top() {
        for &entry in EntryPoint::ALL {
            let shapes = entry.shapes();
            assert!(shapes.windows(2).all(|w| w[0] < w[1]), "{entry}");
        }
        assert_eq!(EntryPoint::SetField.shape_for(Revision::V7_6_03), Some(Revision::V7_5));
        assert_eq!(EntryPoint::SetField.shape_for(Revision::V8_1), Some(Revision::V7_6_04));
        assert_eq!(EntryPoint::GetField.shape_for(Revision::V6_3), Some(Revision::V5_1));
        assert_eq!(EntryPoint::CreateImage.shape_for(Revision::V7_1), None);
        assert_eq!(EntryPoint::GetMultipleExtFieldCandidates.since(), None);
    }

    #[test]
    fn extended_control_from_70() {
        assert!(!Revision::V6_3.extended_control());
        assert!(Revision::V7_0.extended_control());
        assert!(Revision::V8_1.extended_control());
    }

    #[test]
    fn revision_display() {
        assert_eq!(Revision::V7_6_04.to_string(), "7.6.04");
        assert_eq!(Revision::V6_0.to_string(), "6.0");
    }
}
