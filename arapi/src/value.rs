//! The tagged value: one variant per native data type.

use std::os::raw::c_uint;

use arapi_sys::*;
use serde::Serialize;

use crate::arena::Arena;
use crate::codec::Codec;
use crate::error::{Error, Result};
use crate::list::{copy_list, from_native_list};

/// A field, default or property value.
///
/// The variant is the data type, so a payload can never disagree with its
/// tag. Widths match the native union members.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Value {
    Null,
    Keyword(u32),
    Integer(i32),
    Real(f64),
    Char(String),
    Diary(String),
    Enum(u32),
    Time(i32),
    Bitmask(u32),
    Bytes(ByteList),
    Decimal(String),
    Attachment(Attachment),
    Currency(Currency),
    Date(i32),
    TimeOfDay(i32),
    Ulong(u32),
    Coords(Vec<Coord>),
    Query(QueryValue),
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ByteList {
    pub kind: u32,
    pub bytes: Vec<u8>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub enum AttachmentLocation {
    None,
    File(String),
    Buffer(Vec<u8>),
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Attachment {
    pub name: Option<String>,
    pub original_size: i32,
    pub compressed_size: i32,
    pub location: AttachmentLocation,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct FunctionalCurrency {
    pub value: Option<String>,
    pub code: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Currency {
    pub value: Option<String>,
    pub code: String,
    pub conversion_date: i32,
    pub functional: Vec<FunctionalCurrency>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// A query-valued reference.
///
/// The qualifier is query text against `schema`. Compiling and rendering it
/// needs the library, so only a session's encoder and decoder handle it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct QueryValue {
    pub schema: String,
    pub server: String,
    pub qualifier: Option<String>,
    pub value_field: u32,
    pub multi_match: u32,
}

impl Value {
    /// Native data type tag of this value.
    pub const fn data_type(&self) -> c_uint {
        match self {
            Value::Null => AR_DATA_TYPE_NULL,
            Value::Keyword(_) => AR_DATA_TYPE_KEYWORD,
            Value::Integer(_) => AR_DATA_TYPE_INTEGER,
            Value::Real(_) => AR_DATA_TYPE_REAL,
            Value::Char(_) => AR_DATA_TYPE_CHAR,
            Value::Diary(_) => AR_DATA_TYPE_DIARY,
            Value::Enum(_) => AR_DATA_TYPE_ENUM,
            Value::Time(_) => AR_DATA_TYPE_TIME,
            Value::Bitmask(_) => AR_DATA_TYPE_BITMASK,
            Value::Bytes(_) => AR_DATA_TYPE_BYTES,
            Value::Decimal(_) => AR_DATA_TYPE_DECIMAL,
            Value::Attachment(_) => AR_DATA_TYPE_ATTACH,
            Value::Currency(_) => AR_DATA_TYPE_CURRENCY,
            Value::Date(_) => AR_DATA_TYPE_DATE,
            Value::TimeOfDay(_) => AR_DATA_TYPE_TIME_OF_DAY,
            Value::Ulong(_) => AR_DATA_TYPE_ULONG,
            Value::Coords(_) => AR_DATA_TYPE_COORDS,
            Value::Query(_) => AR_DATA_TYPE_QUERY,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Decode a native value, dispatching on its tag. A query value comes
    /// back without its qualifier; a session decoder fills that in.
    ///
    /// # Safety
    ///
    /// The member selected by `raw.dataType` must be initialised, and any
    /// pointer it holds must be null or valid.
    pub unsafe fn decode(raw: &ARValueStruct, codec: &Codec) -> Result<Value> {
        // SAFETY: each arm reads the member its tag selects; pointers are
        // valid per the caller.
        unsafe {
            let u = &raw.u;
            Ok(match raw.dataType {
                AR_DATA_TYPE_NULL => Value::Null,
                AR_DATA_TYPE_KEYWORD => Value::Keyword(u.keyNum),
                AR_DATA_TYPE_INTEGER => Value::Integer(u.intVal),
                AR_DATA_TYPE_REAL => Value::Real(u.realVal),
                AR_DATA_TYPE_CHAR => Value::Char(codec.decode_text(u.charVal)?),
                AR_DATA_TYPE_DIARY => Value::Diary(codec.decode_text(u.diaryVal)?),
                AR_DATA_TYPE_ENUM => Value::Enum(u.enumVal),
                AR_DATA_TYPE_TIME => Value::Time(u.timeVal),
                AR_DATA_TYPE_BITMASK => Value::Bitmask(u.maskVal),
                AR_DATA_TYPE_BYTES => match u.byteListVal.as_ref() {
                    Some(b) => Value::Bytes(ByteList {
                        kind: b.type_,
                        bytes: bytes(b.bytes, b.numItems as usize)?,
                    }),
                    None => Value::Null,
                },
                AR_DATA_TYPE_DECIMAL => Value::Decimal(codec.decode_text(u.decimalVal)?),
                AR_DATA_TYPE_ATTACH => match u.attachVal.as_ref() {
                    Some(a) => Value::Attachment(decode_attachment(a, codec)?),
                    None => Value::Null,
                },
                AR_DATA_TYPE_CURRENCY => match u.currencyVal.as_ref() {
                    Some(c) => Value::Currency(decode_currency(c, codec)?),
                    None => Value::Null,
                },
                AR_DATA_TYPE_DATE => Value::Date(u.dateVal),
                AR_DATA_TYPE_TIME_OF_DAY => Value::TimeOfDay(u.timeOfDayVal),
                AR_DATA_TYPE_ULONG => Value::Ulong(u.ulongVal),
                AR_DATA_TYPE_COORDS => match u.coordListVal.as_ref() {
                    Some(list) => Value::Coords(
                        copy_list(list)?
                            .into_iter()
                            .map(|c| Coord { x: c.x, y: c.y })
                            .collect(),
                    ),
                    None => Value::Coords(Vec::new()),
                },
                AR_DATA_TYPE_QUERY => match u.queryValue.as_ref() {
                    Some(q) => Value::Query(QueryValue {
                        schema: codec.decode_name(&q.schema)?,
                        server: codec.decode_name(&q.server)?,
                        qualifier: None,
                        value_field: q.valueField,
                        multi_match: q.multiMatchCode,
                    }),
                    None => Value::Null,
                },
                other => return Err(Error::UnsupportedValueKind(other)),
            })
        }
    }

    /// Build the native value; referenced storage lives in `arena`.
    ///
    /// A query value with a qualifier is refused: the qualifier has to be
    /// compiled by the library, which a session encoder does.
    pub fn encode(&self, arena: &mut Arena, codec: &Codec) -> Result<ARValueStruct> {
        if let Value::Query(QueryValue {
            qualifier: Some(_), ..
        }) = self
        {
            return Err(Error::DetachedQualifier);
        }
        self.encode_unqualified(arena, codec)
    }

    /// As [`encode`](Self::encode), leaving any query qualifier null.
    pub(crate) fn encode_unqualified(&self, arena: &mut Arena, codec: &Codec) -> Result<ARValueStruct> {
        let u = match self {
            Value::Null => ARValueUnion { ulongVal: 0 },
            Value::Keyword(k) => ARValueUnion { keyNum: *k },
            Value::Integer(i) => ARValueUnion { intVal: *i },
            Value::Real(r) => ARValueUnion { realVal: *r },
            Value::Char(s) => ARValueUnion {
                charVal: arena.str(codec, s)?,
            },
            Value::Diary(s) => ARValueUnion {
                diaryVal: arena.str(codec, s)?,
            },
            Value::Enum(e) => ARValueUnion { enumVal: *e },
            Value::Time(t) => ARValueUnion { timeVal: *t },
            Value::Bitmask(m) => ARValueUnion { maskVal: *m },
            Value::Bytes(b) => {
                let list = arena.list(b.bytes.clone());
                ARValueUnion {
                    byteListVal: arena.boxed(ARByteList {
                        type_: b.kind,
                        numItems: list.numItems,
                        bytes: list.items,
                    }),
                }
            }
            Value::Decimal(s) => ARValueUnion {
                decimalVal: arena.str(codec, s)?,
            },
            Value::Attachment(a) => {
                let raw = encode_attachment(a, arena, codec)?;
                ARValueUnion {
                    attachVal: arena.boxed(raw),
                }
            }
            Value::Currency(c) => {
                let raw = encode_currency(c, arena, codec)?;
                ARValueUnion {
                    currencyVal: arena.boxed(raw),
                }
            }
            Value::Date(d) => ARValueUnion { dateVal: *d },
            Value::TimeOfDay(t) => ARValueUnion { timeOfDayVal: *t },
            Value::Ulong(v) => ARValueUnion { ulongVal: *v },
            Value::Coords(coords) => {
                let raw = coords
                    .iter()
                    .map(|c| ARCoordStruct { x: c.x, y: c.y })
                    .collect();
                let list = arena.list(raw);
                ARValueUnion {
                    coordListVal: arena.boxed(list),
                }
            }
            Value::Query(q) => ARValueUnion {
                queryValue: arena.boxed(ARQueryValueStruct {
                    schema: codec.encode_name(&q.schema)?,
                    server: codec.encode_name(&q.server)?,
                    qualifier: std::ptr::null_mut(),
                    valueField: q.value_field,
                    multiMatchCode: q.multi_match,
                }),
            },
        };
        Ok(ARValueStruct {
            dataType: self.data_type(),
            u,
        })
    }
}

/// # Safety
///
/// `ptr` must be null (with `len == 0`) or point to `len` bytes.
unsafe fn bytes(ptr: *const u8, len: usize) -> Result<Vec<u8>> {
    if len == 0 {
        return Ok(Vec::new());
    }
    if ptr.is_null() {
        return Err(Error::CorruptList(len));
    }
    // SAFETY: per the caller.
    Ok(unsafe { std::slice::from_raw_parts(ptr, len) }.to_vec())
}

unsafe fn decode_attachment(a: &ARAttachStruct, codec: &Codec) -> Result<Attachment> {
    // SAFETY: pointers inside a native attachment are null or valid.
    unsafe {
        let location = match a.loc.locType {
            AR_LOC_FILENAME => match codec.decode_ptr(a.loc.u.filename)? {
                Some(f) => AttachmentLocation::File(f),
                None => AttachmentLocation::None,
            },
            AR_LOC_BUFFER => AttachmentLocation::Buffer(bytes(a.loc.u.buf.buffer, a.loc.u.buf.bufSize)?),
            _ => AttachmentLocation::None,
        };
        Ok(Attachment {
            name: codec.decode_ptr(a.name)?,
            original_size: a.origSize,
            compressed_size: a.compSize,
            location,
        })
    }
}

fn encode_attachment(a: &Attachment, arena: &mut Arena, codec: &Codec) -> Result<ARAttachStruct> {
    let loc = match &a.location {
        AttachmentLocation::None => ARLocStruct {
            locType: 0,
            u: ARLocUnion {
                filename: std::ptr::null_mut(),
            },
        },
        AttachmentLocation::File(f) => ARLocStruct {
            locType: AR_LOC_FILENAME,
            u: ARLocUnion {
                filename: arena.str(codec, f)?,
            },
        },
        AttachmentLocation::Buffer(b) => {
            let list = arena.list(b.clone());
            ARLocStruct {
                locType: AR_LOC_BUFFER,
                u: ARLocUnion {
                    buf: ARBufStruct {
                        bufSize: list.len(),
                        buffer: list.items,
                    },
                },
            }
        }
    };
    Ok(ARAttachStruct {
        name: arena.opt_str(codec, a.name.as_deref())?,
        origSize: a.original_size,
        compSize: a.compressed_size,
        loc,
    })
}

unsafe fn decode_currency(c: &ARCurrencyStruct, codec: &Codec) -> Result<Currency> {
    // SAFETY: strings and the functional list come from the library.
    unsafe {
        Ok(Currency {
            value: codec.decode_ptr(c.value)?,
            code: codec.decode_name(&c.currencyCode)?,
            conversion_date: c.conversionDate,
            functional: from_native_list(&c.funcList, |f| {
                Ok(FunctionalCurrency {
                    value: codec.decode_ptr(f.value)?,
                    code: codec.decode_name(&f.currencyCode)?,
                })
            })?,
        })
    }
}

fn encode_currency(c: &Currency, arena: &mut Arena, codec: &Codec) -> Result<ARCurrencyStruct> {
    let funcs = c
        .functional
        .iter()
        .map(|f| {
            Ok(ARFuncCurrencyStruct {
                value: arena.opt_str(codec, f.value.as_deref())?,
                currencyCode: codec.encode_name(&f.code)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ARCurrencyStruct {
        value: arena.opt_str(codec, c.value.as_deref())?,
        currencyCode: codec.encode_name(&c.code)?,
        conversionDate: c.conversion_date,
        funcList: arena.list(funcs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::codec::Charset;

    fn round_trip_in(v: Value, codec: Codec) -> Value {
        let mut arena = Arena::new();
        let raw = v.encode(&mut arena, &codec).unwrap();
        assert_eq!(raw.dataType, v.data_type());
        // SAFETY: encoded above, arena alive.
        unsafe { Value::decode(&raw, &codec) }.unwrap()
    }

    fn round_trip(v: Value) -> Value {
        round_trip_in(v, Codec::default())
    }

    /// One value of every kind; text is Latin-1 so both charsets carry it.
    fn every_kind() -> Vec<Value> {
        vec![
            Value::Null,
            Value::Keyword(3),
            Value::Integer(-42),
            Value::Real(3.5),
            Value::Char("Größe".into()),
            Value::Diary("café au lait".into()),
            Value::Enum(2),
            Value::Time(1_700_000_000),
            Value::Bitmask(0b101),
            Value::Bytes(ByteList {
                kind: 1,
                bytes: vec![0, 255, 7],
            }),
            Value::Decimal("-12.75".into()),
            Value::Attachment(Attachment {
                name: Some("résumé.pdf".into()),
                original_size: 10,
                compressed_size: 4,
                location: AttachmentLocation::File("/tmp/résumé.pdf".into()),
            }),
            Value::Currency(Currency {
                value: Some("9.99".into()),
                code: "EUR".into(),
                conversion_date: 0,
                functional: Vec::new(),
            }),
            Value::Date(2_460_000),
            Value::TimeOfDay(86_399),
            Value::Ulong(7),
            Value::Coords(vec![Coord { x: 0, y: 0 }, Coord { x: 10, y: 20 }]),
            Value::Query(QueryValue {
                schema: "Société".into(),
                server: "srv".into(),
                qualifier: None,
                value_field: 8,
                multi_match: 1,
            }),
        ]
    }

    #[test]
    fn every_kind_survives_both_charsets() {
        for charset in [Charset::Latin1, Charset::Utf8] {
            for v in every_kind() {
                assert_eq!(round_trip_in(v.clone(), Codec::new(charset)), v, "{charset}");
            }
        }
    }

    #[test]
    fn wide_text_needs_utf8() {
        let wide = [
            Value::Char("日本語".into()),
            Value::Diary("Ελληνικά".into()),
            Value::Decimal("١٢".into()),
        ];
        for v in wide {
            assert_eq!(round_trip_in(v.clone(), Codec::new(Charset::Utf8)), v);
            let mut arena = Arena::new();
            let err = v.encode(&mut arena, &Codec::new(Charset::Latin1)).err().expect("encode should fail");
            assert!(matches!(err, Error::Encoding(_)), "{err}");
        }
    }

    #[test]
    fn query_qualifier_needs_a_session() {
        let v = Value::Query(QueryValue {
            schema: "User".into(),
            server: String::new(),
            qualifier: Some("'Status' = 1".into()),
            value_field: 1,
            multi_match: 0,
        });
        let mut arena = Arena::new();
        let err = v.encode(&mut arena, &Codec::default()).err().expect("encode should fail");
        assert!(matches!(err, Error::DetachedQualifier), "{err}");
    }

    #[test]
    fn scalars_keep_native_width() {
        assert_eq!(round_trip(Value::Integer(i32::MIN)), Value::Integer(i32::MIN));
        assert_eq!(round_trip(Value::Ulong(u32::MAX)), Value::Ulong(u32::MAX));
        assert_eq!(round_trip(Value::Real(0.25)), Value::Real(0.25));
        assert_eq!(round_trip(Value::Null), Value::Null);
    }

    #[test]
    fn aggregates_survive() {
        let currency = Value::Currency(Currency {
            value: Some("12.50".into()),
            code: "EUR".into(),
            conversion_date: 1_700_000_000,
            functional: vec![FunctionalCurrency {
                value: Some("13.10".into()),
                code: "USD".into(),
            }],
        });
        assert_eq!(round_trip(currency.clone()), currency);

        let attach = Value::Attachment(Attachment {
            name: Some("log.txt".into()),
            original_size: 3,
            compressed_size: 3,
            location: AttachmentLocation::Buffer(vec![1, 2, 3]),
        });
        assert_eq!(round_trip(attach.clone()), attach);

        let coords = Value::Coords(vec![Coord { x: 1, y: -2 }]);
        assert_eq!(round_trip(coords.clone()), coords);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let raw = ARValueStruct {
            dataType: 99,
            u: ARValueUnion { ulongVal: 0 },
        };
        // SAFETY: the tag is rejected before any member is read.
        let err = unsafe { Value::decode(&raw, &Codec::default()) }.unwrap_err();
        assert!(matches!(err, Error::UnsupportedValueKind(99)));
    }

    #[test]
    fn char_with_null_pointer_is_empty() {
        let raw = ARValueStruct {
            dataType: AR_DATA_TYPE_CHAR,
            u: ARValueUnion {
                charVal: std::ptr::null_mut(),
            },
        };
        // SAFETY: null strings are accepted.
        let v = unsafe { Value::decode(&raw, &Codec::default()) }.unwrap();
        assert_eq!(v, Value::Char(String::new()));
    }
}
