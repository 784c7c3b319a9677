use arapi_sys::*;
use serde::Serialize;

use super::{Decoder, Encoder, MetaPatch, ObjectMeta, Permission, Property};
use crate::error::{Error, Result};
use crate::list::from_native_list;
use crate::value::Value;

/// How a field maps onto its storage.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldMapping {
    None,
    Regular,
    Join { schema_index: u32, real_id: u32 },
    View { field_name: String },
    Vendor { field_name: String },
}

impl FieldMapping {
    pub(crate) unsafe fn from_native(raw: &ARFieldMappingStruct, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: the tag selects the live member.
        unsafe {
            Ok(match raw.fieldType {
                AR_FIELD_REGULAR => FieldMapping::Regular,
                AR_FIELD_JOIN => FieldMapping::Join {
                    schema_index: raw.u.join.schemaIndex,
                    real_id: raw.u.join.realId,
                },
                AR_FIELD_VIEW => FieldMapping::View {
                    field_name: dec.name(&raw.u.view.fieldName)?,
                },
                AR_FIELD_VENDOR => FieldMapping::Vendor {
                    field_name: dec.name(&raw.u.vendor.fieldName)?,
                },
                _ => FieldMapping::None,
            })
        }
    }

    pub(crate) fn to_native(&self, enc: &Encoder<'_>) -> Result<ARFieldMappingStruct> {
        let (kind, u) = match self {
            FieldMapping::None => (AR_FIELD_NONE, ARFieldMappingUnion::zeroed()),
            FieldMapping::Regular => (AR_FIELD_REGULAR, ARFieldMappingUnion::zeroed()),
            FieldMapping::Join {
                schema_index,
                real_id,
            } => (
                AR_FIELD_JOIN,
                ARFieldMappingUnion {
                    join: ARJoinMappingStruct {
                        schemaIndex: *schema_index,
                        realId: *real_id,
                    },
                },
            ),
            FieldMapping::View { field_name } => (
                AR_FIELD_VIEW,
                ARFieldMappingUnion {
                    view: ARViewMappingStruct {
                        fieldName: enc.name_buf(field_name)?,
                    },
                },
            ),
            FieldMapping::Vendor { field_name } => (
                AR_FIELD_VENDOR,
                ARFieldMappingUnion {
                    vendor: ARViewMappingStruct {
                        fieldName: enc.name_buf(field_name)?,
                    },
                },
            ),
        };
        Ok(ARFieldMappingStruct { fieldType: kind, u })
    }
}

/// Character field limits. `length_units` and `clob_storage` exist from 7.5.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct CharLimits {
    pub max_length: u32,
    pub menu_style: u32,
    pub qbe_match: u32,
    pub char_menu: String,
    pub pattern: Option<String>,
    pub full_text: u32,
    pub length_units: Option<u32>,
    pub clob_storage: Option<u32>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct EnumItem {
    pub name: String,
    pub number: u32,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "style", content = "items", rename_all = "kebab-case")]
pub enum EnumLimits {
    Regular(Vec<String>),
    Custom(Vec<EnumItem>),
    /// Values come from a query; the definition is not carried.
    Query,
}

impl EnumLimits {
    unsafe fn from_native(raw: &AREnumLimitsStruct, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: the style selects the live member.
        unsafe {
            match raw.listStyle {
                AR_ENUM_STYLE_REGULAR => Ok(EnumLimits::Regular(dec.names(&raw.u.regularList)?)),
                AR_ENUM_STYLE_CUSTOM => Ok(EnumLimits::Custom(from_native_list(&raw.u.customList, |i| {
                    Ok(EnumItem {
                        name: dec.name(&i.itemName)?,
                        number: i.itemNumber,
                    })
                })?)),
                AR_ENUM_STYLE_QUERY => Ok(EnumLimits::Query),
                other => Err(Error::UnsupportedLimitKind(other)),
            }
        }
    }

    fn to_native(&self, enc: &mut Encoder<'_>) -> Result<AREnumLimitsStruct> {
        match self {
            EnumLimits::Regular(names) => Ok(AREnumLimitsStruct {
                listStyle: AR_ENUM_STYLE_REGULAR,
                u: AREnumLimitsUnion {
                    regularList: enc.names(names)?,
                },
            }),
            EnumLimits::Custom(items) => {
                let list = enc.map_list(items, |enc, i| {
                    Ok(AREnumItemStruct {
                        itemName: enc.name_buf(&i.name)?,
                        itemNumber: i.number,
                    })
                })?;
                Ok(AREnumLimitsStruct {
                    listStyle: AR_ENUM_STYLE_CUSTOM,
                    u: AREnumLimitsUnion { customList: list },
                })
            }
            EnumLimits::Query => Err(Error::UnsupportedLimitKind(AR_ENUM_STYLE_QUERY)),
        }
    }
}

/// Limits of a field, keyed by its data type.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldLimit {
    None,
    Integer { low: i32, high: i32 },
    Real { low: f64, high: f64, precision: i32 },
    Char(CharLimits),
    Diary { full_text: u32 },
    Enum(EnumLimits),
    Bitmask(EnumLimits),
    Decimal { low: Option<String>, high: Option<String>, precision: i32 },
    Date { min: i32, max: i32 },
    Attachment { max_size: u32, attach_type: u32, full_text: u32 },
    Column { parent: u32, data_field: u32, data_source: u32, length: u32 },
    Table(TableLimits),
    View { max_length: u32 },
    /// `length_units` exists from 7.5.
    Display { max_length: u32, length_units: Option<u32> },
    Currency(CurrencyLimits),
}

/// Table field limits. The sample schema and server exist from 7.5.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct TableLimits {
    pub columns: u32,
    /// Row selection as query text against `schema`.
    pub qualifier: Option<String>,
    pub max_retrieve: u32,
    pub schema: String,
    pub server: String,
    pub sample_schema: Option<String>,
    pub sample_server: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CurrencyDetail {
    pub code: String,
    pub precision: i32,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct CurrencyLimits {
    pub low: Option<String>,
    pub high: Option<String>,
    pub precision: i32,
    pub functional: Vec<CurrencyDetail>,
    pub allowable: Vec<CurrencyDetail>,
}

unsafe fn currency_details(raw: &ARCurrencyDetailList, dec: &Decoder<'_>) -> Result<Vec<CurrencyDetail>> {
    // SAFETY: the list comes from the library.
    unsafe {
        from_native_list(raw, |d| {
            Ok(CurrencyDetail {
                code: dec.name(&d.currencyCode)?,
                precision: d.precision,
            })
        })
    }
}

fn currency_detail_list(details: &[CurrencyDetail], enc: &mut Encoder<'_>) -> Result<ARCurrencyDetailList> {
    enc.map_list(details, |enc, d| {
        Ok(ARCurrencyDetailStruct {
            currencyCode: enc.name_buf(&d.code)?,
            precision: d.precision,
        })
    })
}

impl FieldLimit {
    /// Decode the current layout. `legacy` marks a widened 5.1-7.1 limit,
    /// whose character, table and display limits lack the 7.5 members.
    pub(crate) unsafe fn from_native(raw: &ARFieldLimitStruct, legacy: bool, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: the data type selects the live member.
        unsafe {
            let u = &raw.u;
            Ok(match raw.dataType {
                AR_FIELD_LIMIT_NONE | AR_DATA_TYPE_KEYWORD | AR_DATA_TYPE_TIME | AR_DATA_TYPE_TIME_OF_DAY => {
                    FieldLimit::None
                }
                AR_DATA_TYPE_INTEGER => FieldLimit::Integer {
                    low: u.intLimits.rangeLow,
                    high: u.intLimits.rangeHigh,
                },
                AR_DATA_TYPE_REAL => FieldLimit::Real {
                    low: u.realLimits.rangeLow,
                    high: u.realLimits.rangeHigh,
                    precision: u.realLimits.precision,
                },
                AR_DATA_TYPE_CHAR => {
                    let c = &u.charLimits;
                    FieldLimit::Char(CharLimits {
                        max_length: c.maxLength,
                        menu_style: c.menuStyle,
                        qbe_match: c.qbeMatchOperation,
                        char_menu: dec.name(&c.charMenu)?,
                        pattern: dec.opt_text(c.pattern)?,
                        full_text: c.fullTextOptions,
                        length_units: (!legacy).then_some(c.lengthUnits),
                        clob_storage: (!legacy).then_some(c.storageOptionForCLOB),
                    })
                }
                AR_DATA_TYPE_DIARY => FieldLimit::Diary {
                    full_text: u.diaryLimits.fullTextOptions,
                },
                AR_DATA_TYPE_ENUM => FieldLimit::Enum(EnumLimits::from_native(&u.enumLimits, dec)?),
                AR_DATA_TYPE_BITMASK => FieldLimit::Bitmask(EnumLimits::from_native(&u.maskLimits, dec)?),
                AR_DATA_TYPE_DECIMAL => FieldLimit::Decimal {
                    low: dec.opt_text(u.decimalLimits.rangeLow)?,
                    high: dec.opt_text(u.decimalLimits.rangeHigh)?,
                    precision: u.decimalLimits.precision,
                },
                AR_DATA_TYPE_DATE => FieldLimit::Date {
                    min: u.dateLimits.minDate,
                    max: u.dateLimits.maxDate,
                },
                AR_DATA_TYPE_ATTACH => FieldLimit::Attachment {
                    max_size: u.attachLimits.maxSize,
                    attach_type: u.attachLimits.attachType,
                    full_text: u.attachLimits.fullTextOptions,
                },
                AR_DATA_TYPE_COLUMN => FieldLimit::Column {
                    parent: u.columnLimits.parent,
                    data_field: u.columnLimits.dataField,
                    data_source: u.columnLimits.dataSource,
                    length: u.columnLimits.colLength,
                },
                AR_DATA_TYPE_TABLE => {
                    let t = &u.tableLimits;
                    FieldLimit::Table(TableLimits {
                        columns: t.numColumns,
                        qualifier: dec.qualifier(&t.qualifier)?,
                        max_retrieve: t.maxRetrieve,
                        schema: dec.name(&t.schema)?,
                        server: dec.name(&t.server)?,
                        sample_schema: if legacy { None } else { Some(dec.name(&t.sampleSchema)?) },
                        sample_server: if legacy { None } else { Some(dec.name(&t.sampleServer)?) },
                    })
                }
                AR_DATA_TYPE_VIEW => FieldLimit::View {
                    max_length: u.viewLimits.maxLength,
                },
                AR_DATA_TYPE_DISPLAY => FieldLimit::Display {
                    max_length: u.displayLimits.maxLength,
                    length_units: (!legacy).then_some(u.displayLimits.lengthUnits),
                },
                AR_DATA_TYPE_CURRENCY => {
                    let c = &u.currencyLimits;
                    FieldLimit::Currency(CurrencyLimits {
                        low: dec.opt_text(c.rangeLow)?,
                        high: dec.opt_text(c.rangeHigh)?,
                        precision: c.precision,
                        functional: currency_details(&c.functionalCurrencies, dec)?,
                        allowable: currency_details(&c.allowableCurrencies, dec)?,
                    })
                }
                other => return Err(Error::UnsupportedLimitKind(other)),
            })
        }
    }

    /// # Safety
    ///
    /// `raw` must be a 5.1-7.1 limit filled in by the library.
    pub(crate) unsafe fn from_native51(raw: &ARFieldLimitStruct51, dec: &Decoder<'_>) -> Result<Self> {
        let wide = widen_limit(raw);
        // SAFETY: the widened copy borrows the same native pointers.
        unsafe { Self::from_native(&wide, true, dec) }
    }

    /// Encode in the current layout.
    pub(crate) fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARFieldLimitStruct> {
        let (kind, u) = match self {
            FieldLimit::None => (AR_FIELD_LIMIT_NONE, ARFieldLimitUnion::zeroed()),
            FieldLimit::Integer { low, high } => (
                AR_DATA_TYPE_INTEGER,
                ARFieldLimitUnion {
                    intLimits: ARIntegerLimitsStruct {
                        rangeLow: *low,
                        rangeHigh: *high,
                    },
                },
            ),
            FieldLimit::Real { low, high, precision } => (
                AR_DATA_TYPE_REAL,
                ARFieldLimitUnion {
                    realLimits: ARRealLimitsStruct {
                        rangeLow: *low,
                        rangeHigh: *high,
                        precision: *precision,
                    },
                },
            ),
            FieldLimit::Char(c) => (
                AR_DATA_TYPE_CHAR,
                ARFieldLimitUnion {
                    charLimits: ARCharLimitsStruct {
                        maxLength: c.max_length,
                        menuStyle: c.menu_style,
                        qbeMatchOperation: c.qbe_match,
                        charMenu: enc.name_buf(&c.char_menu)?,
                        pattern: enc.opt_str(c.pattern.as_deref())?,
                        fullTextOptions: c.full_text,
                        lengthUnits: c.length_units.unwrap_or(0),
                        storageOptionForCLOB: c.clob_storage.unwrap_or(0),
                    },
                },
            ),
            FieldLimit::Diary { full_text } => (
                AR_DATA_TYPE_DIARY,
                ARFieldLimitUnion {
                    diaryLimits: ARDiaryLimitsStruct {
                        fullTextOptions: *full_text,
                    },
                },
            ),
            FieldLimit::Enum(e) => (
                AR_DATA_TYPE_ENUM,
                ARFieldLimitUnion {
                    enumLimits: e.to_native(enc)?,
                },
            ),
            FieldLimit::Bitmask(e) => (
                AR_DATA_TYPE_BITMASK,
                ARFieldLimitUnion {
                    maskLimits: e.to_native(enc)?,
                },
            ),
            FieldLimit::Decimal { low, high, precision } => (
                AR_DATA_TYPE_DECIMAL,
                ARFieldLimitUnion {
                    decimalLimits: ARDecimalLimitsStruct {
                        rangeLow: enc.opt_str(low.as_deref())?,
                        rangeHigh: enc.opt_str(high.as_deref())?,
                        precision: *precision,
                    },
                },
            ),
            FieldLimit::Date { min, max } => (
                AR_DATA_TYPE_DATE,
                ARFieldLimitUnion {
                    dateLimits: ARDateLimitsStruct {
                        minDate: *min,
                        maxDate: *max,
                    },
                },
            ),
            FieldLimit::Attachment {
                max_size,
                attach_type,
                full_text,
            } => (
                AR_DATA_TYPE_ATTACH,
                ARFieldLimitUnion {
                    attachLimits: ARAttachLimitsStruct {
                        maxSize: *max_size,
                        attachType: *attach_type,
                        fullTextOptions: *full_text,
                    },
                },
            ),
            FieldLimit::Column {
                parent,
                data_field,
                data_source,
                length,
            } => (
                AR_DATA_TYPE_COLUMN,
                ARFieldLimitUnion {
                    columnLimits: ARColumnLimitsStruct {
                        parent: *parent,
                        dataField: *data_field,
                        dataSource: *data_source,
                        colLength: *length,
                    },
                },
            ),
            FieldLimit::Table(t) => {
                let qual = enc.qualifier(&t.schema, t.qualifier.as_deref())?;
                // SAFETY: a non-null qualifier was compiled by the library and
                // stays loaded until the encoder drops.
                let qualifier = unsafe { qual.as_ref() }.copied().unwrap_or_else(ARQualifierStruct::zeroed);
                (
                    AR_DATA_TYPE_TABLE,
                    ARFieldLimitUnion {
                        tableLimits: ARTableLimitsStruct {
                            numColumns: t.columns,
                            qualifier,
                            maxRetrieve: t.max_retrieve,
                            schema: enc.name_buf(&t.schema)?,
                            server: enc.name_buf(&t.server)?,
                            sampleSchema: enc.name_buf(t.sample_schema.as_deref().unwrap_or(""))?,
                            sampleServer: enc.name_buf(t.sample_server.as_deref().unwrap_or(""))?,
                        },
                    },
                )
            }
            FieldLimit::View { max_length } => (
                AR_DATA_TYPE_VIEW,
                ARFieldLimitUnion {
                    viewLimits: ARViewLimitsStruct { maxLength: *max_length },
                },
            ),
            FieldLimit::Display {
                max_length,
                length_units,
            } => (
                AR_DATA_TYPE_DISPLAY,
                ARFieldLimitUnion {
                    displayLimits: ARDisplayLimitsStruct {
                        maxLength: *max_length,
                        lengthUnits: length_units.unwrap_or(0),
                    },
                },
            ),
            FieldLimit::Currency(c) => (
                AR_DATA_TYPE_CURRENCY,
                ARFieldLimitUnion {
                    currencyLimits: ARCurrencyLimitsStruct {
                        rangeLow: enc.opt_str(c.low.as_deref())?,
                        rangeHigh: enc.opt_str(c.high.as_deref())?,
                        precision: c.precision,
                        functionalCurrencies: currency_detail_list(&c.functional, enc)?,
                        allowableCurrencies: currency_detail_list(&c.allowable, enc)?,
                    },
                },
            ),
        };
        Ok(ARFieldLimitStruct { dataType: kind, u })
    }

    /// Encode in the 5.1-7.1 layout; the 7.5 members are dropped.
    pub(crate) fn to_native51(&self, enc: &mut Encoder<'_>) -> Result<ARFieldLimitStruct51> {
        Ok(narrow_limit(&self.to_native(enc)?))
    }
}

/// Copy a 5.1-7.1 limit into the current layout.
///
/// Every member of the old union is a prefix of its counterpart in the new
/// one, so a byte copy over zeroed storage yields the same limit with the
/// 7.5 members zero. Pointers are shared, not duplicated.
pub(crate) fn widen_limit(raw: &ARFieldLimitStruct51) -> ARFieldLimitStruct {
    let mut u = ARFieldLimitUnion::zeroed();
    // SAFETY: the old union is no larger than the new one and both are
    // plain data.
    unsafe {
        std::ptr::copy_nonoverlapping(
            (&raw.u as *const ARFieldLimitUnion51).cast::<u8>(),
            (&mut u as *mut ARFieldLimitUnion).cast::<u8>(),
            size_of::<ARFieldLimitUnion51>(),
        );
    }
    ARFieldLimitStruct {
        dataType: raw.dataType,
        u,
    }
}

/// The inverse of [`widen_limit`]: keep the old-layout prefix.
pub(crate) fn narrow_limit(raw: &ARFieldLimitStruct) -> ARFieldLimitStruct51 {
    // SAFETY: the new union is at least as large as the old one and every
    // old member is a prefix of the new member of the same name.
    let u = unsafe { std::ptr::read((&raw.u as *const ARFieldLimitUnion).cast::<ARFieldLimitUnion51>()) };
    ARFieldLimitStruct51 {
        dataType: raw.dataType,
        u,
    }
}

/// Display properties of one VUI.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DisplayInstance {
    pub vui: u32,
    pub properties: Vec<Property>,
}

/// Common display properties plus one set per VUI.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct DisplayInstances {
    pub common: Vec<Property>,
    pub instances: Vec<DisplayInstance>,
}

impl DisplayInstances {
    pub(crate) unsafe fn from_native(raw: &ARDisplayInstanceList, dec: &Decoder<'_>) -> Result<Self> {
        let list = ARList::from_raw_parts(raw.dInstanceList, raw.numItems);
        // SAFETY: library output; the instance array is a counted list.
        unsafe {
            Ok(Self {
                common: dec.props(&raw.commonProps)?,
                instances: from_native_list(&list, |d| {
                    Ok(DisplayInstance {
                        vui: d.vui,
                        properties: dec.props(&d.props)?,
                    })
                })?,
            })
        }
    }

    pub(crate) fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARDisplayInstanceList> {
        let common = enc.props(&self.common)?;
        let list = enc.map_list(&self.instances, |enc, d| {
            Ok(ARDisplayInstanceStruct {
                vui: d.vui,
                props: enc.props(&d.properties)?,
            })
        })?;
        Ok(ARDisplayInstanceList {
            commonProps: common,
            numItems: list.numItems,
            dInstanceList: list.items,
        })
    }
}

/// A field definition.
///
/// `field_option` appears from 7.0. `meta.properties` appears from 7.0.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Field {
    pub schema: String,
    pub id: u32,
    pub name: String,
    pub mapping: FieldMapping,
    pub data_type: u32,
    pub option: u32,
    pub create_mode: u32,
    pub field_option: Option<u32>,
    pub default: Value,
    pub permissions: Vec<Permission>,
    pub limit: FieldLimit,
    pub display: DisplayInstances,
    pub meta: ObjectMeta,
}

/// Changes to a field; `None` leaves the attribute as it is.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub mapping: Option<FieldMapping>,
    pub option: Option<u32>,
    pub create_mode: Option<u32>,
    pub field_option: Option<u32>,
    pub default: Option<Value>,
    pub permissions: Option<Vec<Permission>>,
    pub limit: Option<FieldLimit>,
    pub display: Option<DisplayInstances>,
    pub meta: MetaPatch,
    /// Set-field options passed from 7.6.04 on.
    pub set_options: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::raw::c_char;

    #[test]
    fn widening_keeps_the_shared_prefix() {
        let mut narrow = ARFieldLimitStruct51::zeroed();
        narrow.dataType = AR_DATA_TYPE_CHAR;
        narrow.u.charLimits = ARCharLimitsStruct51 {
            maxLength: 255,
            menuStyle: 1,
            qbeMatchOperation: 2,
            charMenu: [0; AR_MAX_NAME_SIZE + 1],
            pattern: std::ptr::null_mut(),
            fullTextOptions: 3,
        };
        let wide = widen_limit(&narrow);
        // SAFETY: the char member was written above.
        let c = unsafe { wide.u.charLimits };
        assert_eq!((c.maxLength, c.menuStyle, c.qbeMatchOperation, c.fullTextOptions), (255, 1, 2, 3));
        assert_eq!((c.lengthUnits, c.storageOptionForCLOB), (0, 0));

        let back = narrow_limit(&wide);
        // SAFETY: as above.
        assert_eq!(unsafe { back.u.charLimits.maxLength }, 255);
    }

    #[test]
    fn widening_other_members() {
        let mut narrow = ARFieldLimitStruct51::zeroed();
        narrow.dataType = AR_DATA_TYPE_REAL;
        narrow.u.realLimits = ARRealLimitsStruct {
            rangeLow: -1.5,
            rangeHigh: 9.25,
            precision: 2,
        };
        let wide = widen_limit(&narrow);
        // SAFETY: the real member was written above.
        let r = unsafe { wide.u.realLimits };
        assert_eq!((r.rangeLow, r.rangeHigh, r.precision), (-1.5, 9.25, 2));
    }

    #[test]
    fn widening_a_table_limit_leaves_sample_empty() {
        let mut narrow = ARFieldLimitStruct51::zeroed();
        narrow.dataType = AR_DATA_TYPE_TABLE;
        let mut t = ARTableLimitsStruct51::zeroed();
        t.numColumns = 4;
        t.maxRetrieve = 50;
        t.schema[0] = b'T' as c_char;
        t.server[0] = b'S' as c_char;
        narrow.u.tableLimits = t;
        let wide = widen_limit(&narrow);
        // SAFETY: the table member was written above.
        let w = unsafe { wide.u.tableLimits };
        assert_eq!((w.numColumns, w.maxRetrieve), (4, 50));
        assert_eq!((w.schema[0], w.server[0]), (b'T' as c_char, b'S' as c_char));
        assert_eq!((w.sampleSchema[0], w.sampleServer[0]), (0, 0));

        // SAFETY: as above.
        assert_eq!(unsafe { narrow_limit(&wide).u.tableLimits.maxRetrieve }, 50);
    }
}
