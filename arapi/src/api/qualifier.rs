//! Query text to and from the library's compiled qualifier form.

use std::os::raw::c_char;

use arapi_sys::*;

use crate::error::Result;
use crate::ladder::EntryPoint;
use crate::records::Encoder;
use crate::release::Outputs;
use crate::session::Session;

impl Session {
    /// Compile query text against a schema. The compiled qualifier lives in
    /// `scope` and is released with it.
    pub(crate) fn load_qualifier(
        &self,
        scope: &Outputs<'_>,
        schema: *const c_char,
        text: *const c_char,
    ) -> Result<*mut ARQualifierStruct> {
        let callee = self.callee(EntryPoint::LoadQualifier)?;
        let qual = scope.alloc::<ARQualifierStruct>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; inputs are live C strings, the qualifier
            // is a scope-owned output.
            unsafe {
                callee.cast::<ARLoadARQualifierStructFn>()(ctrl, schema, std::ptr::null(), text, qual.ptr(), status)
            }
        })?;
        Ok(qual.ptr())
    }

    /// Render a compiled qualifier as query text. An empty qualifier (no
    /// operation) is `None` and costs no native call.
    pub(crate) fn render_qualifier(&self, qual: &ARQualifierStruct) -> Result<Option<String>> {
        if qual.operation == 0 {
            return Ok(None);
        }
        let callee = self.callee(EntryPoint::DecodeQualifier)?;
        let out = Outputs::new(self.frees());
        let text = out.alloc::<*mut c_char>();
        self.invoke(callee, |ctrl, status| {
            // SAFETY: single shape; the string is a scope-owned output.
            unsafe { callee.cast::<ARDecodeARQualifierStructFn>()(ctrl, qual, text.ptr(), status) }
        })?;
        // SAFETY: filled in by the call.
        unsafe { self.codec().decode_ptr(*text.get()) }
    }

    /// Check that query text compiles against `schema`.
    pub fn check_qualifier(&self, schema: &str, text: &str) -> Result<()> {
        let mut enc = Encoder::new(self);
        enc.qualifier(schema, Some(text))?;
        Ok(())
    }
}
