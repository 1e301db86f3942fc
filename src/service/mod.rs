//! Service layer: the default event client and its transports.

mod http;
mod mozdef;
mod syslog;
#[cfg(test)]
mod test_support;

pub use mozdef::{MozDefEvent, DEFAULT_CATEGORY};
