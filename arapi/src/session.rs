//! Login state and the call-through every entry point goes through.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::os::raw::{c_char, c_int};
use std::sync::Arc;

use arapi_sys::*;
use serde::Serialize;

use crate::arena::Arena;
use crate::binding::Binding;
use crate::codec::{Charset, Codec};
use crate::error::{Error, Result};
use crate::ladder::{Callee, EntryPoint, Revision};
use crate::release::{FreeTable, Outputs};
use crate::status::{Outcome, StatusList, outcome_of};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum SessionState {
    Uninitialized,
    Initializing,
    Active,
    Terminated,
}

/// Parsed `host[:port]`. An empty host asks the library for its server list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Endpoint {
    pub host: String,
    pub port: Option<u16>,
}

impl Endpoint {
    pub fn parse(s: &str) -> Result<Endpoint> {
        let s = s.trim();
        match s.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| Error::InvalidEndpoint(s.to_string()))?;
                if host.contains(':') {
                    return Err(Error::InvalidEndpoint(s.to_string()));
                }
                Ok(Endpoint {
                    host: host.to_string(),
                    port: Some(port),
                })
            }
            None => Ok(Endpoint {
                host: s.to_string(),
                port: None,
            }),
        }
    }
}

/// Credentials and options for [`Session::login`].
#[derive(Clone, PartialEq, Eq)]
pub struct LoginParams {
    endpoint: String,
    user: String,
    password: String,
    locale: Option<String>,
    charset: Option<Charset>,
    auth: Option<String>,
    rpc: Option<u32>,
}

impl LoginParams {
    pub fn new(endpoint: &str, user: &str, password: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            user: user.to_string(),
            password: password.to_string(),
            locale: None,
            charset: None,
            auth: None,
            rpc: None,
        }
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    /// Force a charset instead of deriving it from the locale.
    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = Some(charset);
        self
    }

    pub fn auth(mut self, auth: &str) -> Self {
        self.auth = Some(auth.to_string());
        self
    }

    /// Private server RPC program number.
    pub fn rpc(mut self, rpc: u32) -> Self {
        self.rpc = Some(rpc);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn rpc_number(&self) -> Option<u32> {
        self.rpc
    }

    fn negotiated_charset(&self) -> Charset {
        self.charset
            .or_else(|| self.locale.as_deref().and_then(Charset::from_locale))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for LoginParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginParams")
            .field("endpoint", &self.endpoint)
            .field("user", &self.user)
            .field("locale", &self.locale)
            .field("charset", &self.charset)
            .field("rpc", &self.rpc)
            .finish_non_exhaustive()
    }
}

/// Flags returned by user verification.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct UserFlags {
    pub admin: bool,
    pub sub_admin: bool,
    pub custom: bool,
}

enum ControlBlock {
    Legacy(Box<ARControlStruct51>),
    Current(Box<ARControlStruct>),
}

macro_rules! with_control {
    ($block:expr, $c:ident => $body:expr) => {
        match $block {
            ControlBlock::Legacy($c) => $body,
            ControlBlock::Current($c) => $body,
        }
    };
}

impl ControlBlock {
    fn for_revision(revision: Revision) -> Self {
        if revision.extended_control() {
            ControlBlock::Current(Box::new(ARControlStruct::zeroed()))
        } else {
            ControlBlock::Legacy(Box::new(ARControlStruct51::zeroed()))
        }
    }

    fn fill(&mut self, codec: &Codec, params: &LoginParams, host: &str) -> Result<()> {
        let locale = params.locale.as_deref().unwrap_or("");
        let auth = params.auth.as_deref().unwrap_or("");
        with_control!(self, c => {
            c.user = credential(codec, &params.user, "user")?;
            c.password = credential(codec, &params.password, "password")?;
            c.localeInfo.locale = codec.encode_name(locale)?;
            c.localeInfo.charSet = codec.encode_name(codec.charset().wire_name())?;
            c.authString = credential(codec, auth, "authentication string")?;
            c.server = codec.encode_name(host)?;
        });
        Ok(())
    }

    fn set_server(&mut self, codec: &Codec, host: &str) -> Result<()> {
        with_control!(self, c => c.server = codec.encode_name(host)?);
        Ok(())
    }

    fn as_ptr(&mut self) -> ARControlPtr {
        with_control!(self, c => &mut **c as *mut _ as ARControlPtr)
    }
}

/// Encode a credential. An overlong one is reported by field name only.
fn credential<const N: usize>(codec: &Codec, value: &str, field: &'static str) -> Result<[c_char; N]> {
    codec.encode_name(value).map_err(|e| match e {
        Error::NameTooLong { max, .. } => Error::FieldTooLong { field, max },
        other => other,
    })
}

/// One login against a server.
///
/// Calls take `&self`; the control block is mutated by the native library
/// during each call, so a session is `Send` but not `Sync`.
pub struct Session {
    binding: Arc<Binding>,
    control: RefCell<ControlBlock>,
    state: Cell<SessionState>,
    codec: Codec,
    server: Option<String>,
    flags: UserFlags,
    last_status: RefCell<StatusList>,
    _unsync: PhantomData<Cell<()>>,
}

impl Session {
    pub fn new(binding: Arc<Binding>) -> Self {
        let control = ControlBlock::for_revision(binding.revision());
        Self {
            binding,
            control: RefCell::new(control),
            state: Cell::new(SessionState::Uninitialized),
            codec: Codec::default(),
            server: None,
            flags: UserFlags::default(),
            last_status: RefCell::new(StatusList::default()),
            _unsync: PhantomData,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn binding(&self) -> &Arc<Binding> {
        &self.binding
    }

    pub fn revision(&self) -> Revision {
        self.binding.revision()
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Server the session is bound to, after login.
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn user_flags(&self) -> UserFlags {
        self.flags
    }

    /// Status list of the most recent native call.
    pub fn last_status(&self) -> StatusList {
        self.last_status.borrow().clone()
    }

    pub fn last_outcome(&self) -> Outcome {
        self.last_status.borrow().outcome()
    }

    /// Log in: initialise the native context, pick the server, verify the
    /// user. On failure the session ends up `Terminated`.
    pub fn login(&mut self, params: &LoginParams) -> Result<()> {
        match self.state.get() {
            SessionState::Uninitialized | SessionState::Terminated => {}
            SessionState::Initializing | SessionState::Active => return Err(Error::SessionActive),
        }
        let endpoint = Endpoint::parse(&params.endpoint)?;
        self.state.set(SessionState::Initializing);
        self.codec = Codec::new(params.negotiated_charset());
        self.control = RefCell::new(ControlBlock::for_revision(self.revision()));

        let mut initialized = false;
        match self.login_steps(params, &endpoint, &mut initialized) {
            Ok(()) => {
                self.state.set(SessionState::Active);
                log::info!(
                    "logged in to {} as {} ({})",
                    self.server.as_deref().unwrap_or(""),
                    params.user,
                    self.codec.charset()
                );
                Ok(())
            }
            Err(e) => {
                if initialized {
                    if let Err(term) = self.terminate() {
                        log::warn!("termination after failed login: {term}");
                    }
                }
                self.codec = Codec::default();
                self.server = None;
                self.state.set(SessionState::Terminated);
                log::error!("login to '{}' failed: {e}", params.endpoint);
                Err(e)
            }
        }
    }

    fn login_steps(
        &mut self,
        params: &LoginParams,
        endpoint: &Endpoint,
        initialized: &mut bool,
    ) -> Result<()> {
        let codec = self.codec;
        self.control.get_mut().fill(&codec, params, &endpoint.host)?;

        let init = self.binding.callee(EntryPoint::Initialization)?;
        self.invoke_raw(init, |ctrl, status| {
            // SAFETY: ARInitialization has a single shape.
            unsafe { init.cast::<ARInitializationFn>()(ctrl, status) }
        })?;
        *initialized = true;

        let host = if endpoint.host.is_empty() {
            self.first_server()?
        } else {
            endpoint.host.clone()
        };
        self.control.get_mut().set_server(&codec, &host)?;

        if endpoint.port.is_some() || params.rpc.is_some() {
            let set_port = self.binding.callee(EntryPoint::SetServerPort)?;
            let mut arena = Arena::new();
            let server = arena.str(&codec, &host)?;
            let port = c_int::from(endpoint.port.unwrap_or(0));
            let rpc = c_int::try_from(params.rpc.unwrap_or(0))
                .map_err(|_| Error::InvalidEndpoint(format!("{} (rpc {})", params.endpoint, params.rpc.unwrap_or(0))))?;
            self.invoke_raw(set_port, |ctrl, status| {
                // SAFETY: single shape; `server` lives in the arena.
                unsafe { set_port.cast::<ARSetServerPortFn>()(ctrl, server, port, rpc, status) }
            })?;
        }

        let verify = self.binding.callee(EntryPoint::VerifyUser)?;
        let outputs = Outputs::new(self.binding.frees());
        let admin = outputs.alloc::<ARBoolean>();
        let sub_admin = outputs.alloc::<ARBoolean>();
        let custom = outputs.alloc::<ARBoolean>();
        self.invoke_raw(verify, |ctrl, status| {
            // SAFETY: single shape; the flags are scope-owned outputs.
            unsafe {
                verify.cast::<ARVerifyUserFn>()(ctrl, admin.ptr(), sub_admin.ptr(), custom.ptr(), status)
            }
        })?;
        self.flags = UserFlags {
            admin: *admin.get() != 0,
            sub_admin: *sub_admin.get() != 0,
            custom: *custom.get() != 0,
        };
        drop(outputs);
        self.server = Some(host);
        Ok(())
    }

    fn first_server(&self) -> Result<String> {
        let callee = self.binding.callee(EntryPoint::GetListServer)?;
        let outputs = Outputs::new(self.binding.frees());
        let list = outputs.alloc::<ARServerNameList>();
        self.invoke_raw(callee, |ctrl, status| {
            // SAFETY: single shape; the list is a scope-owned output.
            unsafe { callee.cast::<ARGetListServerFn>()(ctrl, list.ptr(), status) }
        })?;
        // SAFETY: filled in by the library.
        let names = unsafe { list.get().as_slice() }.ok_or(Error::CorruptList(list.get().len()))?;
        let first = names.first().ok_or(Error::NoServer)?;
        let host = self.codec.decode_name(first)?;
        log::info!("no server given, using {host} from the server list");
        Ok(host)
    }

    /// Log off. Only an active session calls the native termination; in any
    /// other state this returns an empty status without touching the library.
    pub fn logoff(&mut self) -> Result<StatusList> {
        if self.state.get() != SessionState::Active {
            return Ok(StatusList::default());
        }
        let result = self.terminate();
        self.state.set(SessionState::Terminated);
        self.codec = Codec::default();
        log::info!("logged off from {}", self.server.take().unwrap_or_default());
        result
    }

    fn terminate(&self) -> Result<StatusList> {
        let callee = self.binding.callee(EntryPoint::Termination)?;
        self.invoke_raw(callee, |ctrl, status| {
            // SAFETY: ARTermination has a single shape.
            unsafe { callee.cast::<ARTerminationFn>()(ctrl, status) }
        })
    }

    /// Resolve an entry point for a call on an active session.
    pub(crate) fn callee(&self, entry: EntryPoint) -> Result<Callee> {
        if self.state.get() != SessionState::Active {
            return Err(Error::Uninitialized);
        }
        self.binding.callee(entry)
    }

    pub(crate) fn frees(&self) -> &FreeTable {
        self.binding.frees()
    }

    /// Run one native call on an active session and report its status.
    ///
    /// `call` receives the control block and the status output; it must
    /// call `callee` through the signature of `callee.shape()`.
    pub(crate) fn invoke(
        &self,
        callee: Callee,
        call: impl FnOnce(ARControlPtr, *mut ARStatusList) -> c_int,
    ) -> Result<StatusList> {
        if self.state.get() != SessionState::Active {
            return Err(Error::Uninitialized);
        }
        self.invoke_raw(callee, call)
    }

    fn invoke_raw(
        &self,
        callee: Callee,
        call: impl FnOnce(ARControlPtr, *mut ARStatusList) -> c_int,
    ) -> Result<StatusList> {
        let entry = callee.entry();
        log::trace!("{entry} (shape {})", callee.shape());

        let outputs = Outputs::new(self.binding.frees());
        let status = outputs.alloc::<ARStatusList>();
        let rc = {
            let mut control = self.control.borrow_mut();
            call(control.as_ptr(), status.ptr())
        };
        // SAFETY: the status list was filled in by the call (or left zeroed).
        let list = unsafe { StatusList::from_native(status.get(), &self.codec) }?;
        drop(outputs);

        *self.last_status.borrow_mut() = list.clone();
        match outcome_of(rc, &list) {
            Outcome::Ok => Ok(list),
            Outcome::Warning => {
                log::warn!("{entry}: {list}");
                Ok(list)
            }
            Outcome::Failure => {
                log::error!("{entry} failed (rc {rc}): {list}");
                Err(Error::Server {
                    entry,
                    status: list,
                })
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.state.get() == SessionState::Active {
            if let Err(e) = self.logoff() {
                log::error!("logoff on drop failed: {e}");
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state.get())
            .field("server", &self.server)
            .field("revision", &self.revision())
            .field("charset", &self.codec.charset())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_forms() {
        assert_eq!(
            Endpoint::parse("host:1234").unwrap(),
            Endpoint {
                host: "host".into(),
                port: Some(1234)
            }
        );
        assert_eq!(Endpoint::parse("host").unwrap().port, None);
        assert_eq!(Endpoint::parse("").unwrap().host, "");
        assert_eq!(Endpoint::parse(":2020").unwrap().port, Some(2020));
        assert!(matches!(Endpoint::parse("host:x"), Err(Error::InvalidEndpoint(_))));
        assert!(matches!(Endpoint::parse("host:99999"), Err(Error::InvalidEndpoint(_))));
    }

    #[test]
    fn charset_negotiation() {
        let p = LoginParams::new("h", "u", "p");
        assert_eq!(p.negotiated_charset(), Charset::Latin1);
        assert_eq!(p.clone().locale("en_US.UTF-8").negotiated_charset(), Charset::Utf8);
        assert_eq!(
            p.locale("en_US.UTF-8").charset(Charset::Latin1).negotiated_charset(),
            Charset::Latin1
        );
    }

    #[test]
    fn password_is_not_printed() {
        let p = LoginParams::new("h", "u", "secret");
        assert!(!format!("{p:?}").contains("secret"));
    }

    #[test]
    fn overlong_credential_names_the_field_only() {
        let secret = "s".repeat(AR_MAX_PASSWORD_SIZE + 1);
        let err = credential::<{ AR_MAX_PASSWORD_SIZE + 1 }>(&Codec::default(), &secret, "password").unwrap_err();
        assert!(matches!(err, Error::FieldTooLong { field: "password", max: AR_MAX_PASSWORD_SIZE }));
        assert!(!err.to_string().contains(&secret));
        assert!(credential::<{ AR_MAX_PASSWORD_SIZE + 1 }>(&Codec::default(), "pw", "password").is_ok());
    }

    #[test]
    fn control_layout_follows_revision() {
        assert!(matches!(ControlBlock::for_revision(Revision::V6_3), ControlBlock::Legacy(_)));
        assert!(matches!(ControlBlock::for_revision(Revision::V7_0), ControlBlock::Current(_)));
    }
}
