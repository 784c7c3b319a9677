use arapi_sys::*;
use serde::Serialize;

use super::{Decoder, Encoder, MetaPatch, ObjectMeta};
use crate::error::Result;
use crate::list::from_native_list;

/// One menu entry: either a value or a nested menu.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct MenuItem {
    pub label: String,
    pub content: MenuContent,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuContent {
    Value(String),
    Menu(Box<MenuDefinition>),
}

/// How a character menu gets its items.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MenuDefinition {
    None,
    List {
        items: Vec<MenuItem>,
    },
    Query {
        schema: String,
        server: String,
        qualifier: Option<String>,
        /// Up to five fields forming the label levels.
        label_fields: Vec<u32>,
        value_field: u32,
        sort_on_label: bool,
    },
    File {
        location: u32,
        filename: String,
    },
    Sql {
        server: String,
        command: String,
        label_indexes: Vec<i32>,
        value_index: i32,
    },
}

fn levels<T: Copy + Default + PartialEq>(raw: &[T]) -> Vec<T> {
    raw.iter().copied().take_while(|v| *v != T::default()).collect()
}

fn level_array<T: Copy + Default>(items: &[T]) -> [T; AR_MAX_LEVELS_DYNAMIC_MENU] {
    let mut out = [T::default(); AR_MAX_LEVELS_DYNAMIC_MENU];
    for (slot, v) in out.iter_mut().zip(items) {
        *slot = *v;
    }
    out
}

impl MenuDefinition {
    pub(crate) unsafe fn from_native(raw: &ARCharMenuStruct, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: the menu type selects the live member.
        unsafe {
            Ok(match raw.menuType {
                AR_CHAR_MENU_LIST => MenuDefinition::List {
                    items: from_native_list(&raw.u.menuList, |i| MenuItem::from_native(i, dec))?,
                },
                AR_CHAR_MENU_QUERY => {
                    let q = &raw.u.menuQuery;
                    MenuDefinition::Query {
                        schema: dec.name(&q.schema)?,
                        server: dec.name(&q.server)?,
                        qualifier: dec.qualifier(q.qualifier)?,
                        label_fields: levels(&q.labelField),
                        value_field: q.valueField,
                        sort_on_label: q.sortOnLabel != 0,
                    }
                }
                AR_CHAR_MENU_FILE => MenuDefinition::File {
                    location: raw.u.menuFile.fileLocation,
                    filename: dec.text(raw.u.menuFile.filename)?,
                },
                AR_CHAR_MENU_SQL => {
                    let s = &raw.u.menuSQL;
                    MenuDefinition::Sql {
                        server: dec.name(&s.server)?,
                        command: dec.text(s.sqlCommand)?,
                        label_indexes: levels(&s.labelIndex),
                        value_index: s.valueIndex,
                    }
                }
                _ => MenuDefinition::None,
            })
        }
    }

    pub(crate) fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARCharMenuStruct> {
        let (menu_type, u) = match self {
            MenuDefinition::None => (AR_CHAR_MENU_NONE, ARCharMenuUnion::zeroed()),
            MenuDefinition::List { items } => (
                AR_CHAR_MENU_LIST,
                ARCharMenuUnion {
                    menuList: enc.map_list(items, |enc, i| i.to_native(enc))?,
                },
            ),
            MenuDefinition::Query {
                schema,
                server,
                qualifier,
                label_fields,
                value_field,
                sort_on_label,
            } => (
                AR_CHAR_MENU_QUERY,
                ARCharMenuUnion {
                    menuQuery: ARCharMenuQueryStruct {
                        schema: enc.name_buf(schema)?,
                        server: enc.name_buf(server)?,
                        qualifier: enc.qualifier_ptr_or_empty(schema, qualifier.as_deref())?,
                        labelField: level_array(label_fields),
                        valueField: *value_field,
                        sortOnLabel: *sort_on_label as ARBoolean,
                    },
                },
            ),
            MenuDefinition::File { location, filename } => (
                AR_CHAR_MENU_FILE,
                ARCharMenuUnion {
                    menuFile: ARCharMenuFileStruct {
                        fileLocation: *location,
                        filename: enc.str(filename)?,
                    },
                },
            ),
            MenuDefinition::Sql {
                server,
                command,
                label_indexes,
                value_index,
            } => (
                AR_CHAR_MENU_SQL,
                ARCharMenuUnion {
                    menuSQL: ARCharMenuSQLStruct {
                        server: enc.name_buf(server)?,
                        sqlCommand: enc.str(command)?,
                        labelIndex: level_array(label_indexes),
                        valueIndex: *value_index,
                    },
                },
            ),
        };
        Ok(ARCharMenuStruct { menuType: menu_type, u })
    }
}

impl MenuItem {
    pub fn value(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            content: MenuContent::Value(value.to_string()),
        }
    }

    unsafe fn from_native(raw: &ARCharMenuItemStruct, dec: &Decoder<'_>) -> Result<Self> {
        // SAFETY: the item type selects the live member.
        let content = unsafe {
            match raw.menuType {
                AR_MENU_TYPE_MENU => match raw.u.childMenu.as_ref() {
                    Some(child) => MenuContent::Menu(Box::new(MenuDefinition::from_native(child, dec)?)),
                    None => MenuContent::Menu(Box::new(MenuDefinition::None)),
                },
                _ => MenuContent::Value(dec.text(raw.u.menuValue)?),
            }
        };
        Ok(Self {
            label: dec.name(&raw.menuLabel)?,
            content,
        })
    }

    fn to_native(&self, enc: &mut Encoder<'_>) -> Result<ARCharMenuItemStruct> {
        let (menu_type, u) = match &self.content {
            MenuContent::Value(v) => (AR_MENU_TYPE_VALUE, ARCharMenuItemUnion { menuValue: enc.str(v)? }),
            MenuContent::Menu(child) => {
                let child = child.to_native(enc)?;
                (
                    AR_MENU_TYPE_MENU,
                    ARCharMenuItemUnion {
                        childMenu: enc.boxed(child),
                    },
                )
            }
        };
        Ok(ARCharMenuItemStruct {
            menuLabel: enc.name_buf(&self.label)?,
            menuType: menu_type,
            u,
        })
    }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct CharMenu {
    pub name: String,
    pub refresh: u32,
    pub definition: MenuDefinition,
    pub meta: ObjectMeta,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct CharMenuPatch {
    pub new_name: Option<String>,
    pub refresh: Option<u32>,
    pub definition: Option<MenuDefinition>,
    pub meta: MetaPatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_stop_at_the_first_unset_slot() {
        assert_eq!(levels(&[7u32, 8, 0, 9, 0]), vec![7, 8]);
        assert_eq!(level_array(&[1i32, 2]), [1, 2, 0, 0, 0]);
        assert_eq!(level_array(&[1u32, 2, 3, 4, 5, 6]), [1, 2, 3, 4, 5]);
    }
}
