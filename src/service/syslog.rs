//! Local syslog delivery over the system log socket.

use std::io;

use crate::domain::EventMessage;

/// `user` facility.
const FACILITY_USER: u8 = 1;

#[cfg(unix)]
const SOCKET_PATHS: &[&str] = &["/dev/log", "/var/run/syslog", "/var/run/log"];

/// Format a BSD-style syslog line carrying the JSON message.
pub fn format_line(message: &EventMessage, body: &[u8]) -> String {
    let priority = FACILITY_USER * 8 + message.severity.syslog_priority();
    format!(
        "<{}>{}[{}]: {}",
        priority,
        message.processname,
        message.processid,
        String::from_utf8_lossy(body)
    )
}

/// Write one line to the first reachable syslog socket.
#[cfg(unix)]
pub fn send(message: &EventMessage, body: &[u8]) -> io::Result<()> {
    use std::os::unix::net::UnixDatagram;

    let socket = UnixDatagram::unbound()?;
    let line = format_line(message, body);
    let mut last_err = io::Error::new(io::ErrorKind::NotFound, "no syslog socket available");
    for path in SOCKET_PATHS {
        match socket.send_to(line.as_bytes(), path) {
            Ok(_) => return Ok(()),
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}

#[cfg(not(unix))]
pub fn send(_message: &EventMessage, _body: &[u8]) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "syslog delivery is only supported on unix",
    ))
}
