//! Connection resolution: selection criteria plus catalog, one endpoint out.

use crate::settings::ServerSelection;

use super::catalog::Catalog;
use super::error::ResolveError;
use super::model::Connection;
use super::pick::Picker;

/// Resolves the selection against the catalog into one concrete endpoint.
///
/// The protocol falls back to the provider default when unspecified, and
/// the port to the provider's compiled-in default for the resolved
/// transport family and protocol. Every matched server is expanded into
/// one candidate per IP address it exposes, identity fields copied
/// verbatim, and exactly one candidate is picked through the injected
/// `picker`. Expansion order is server-order then IP-order, but callers
/// must not rely on it.
///
/// Call with a reconciled selection only: the transport family must be
/// set.
///
/// # Errors
///
/// Returns [`ResolveError::NoMatchingServer`] when the filter matches no
/// server, and [`ResolveError::NoReachableAddress`] when servers matched
/// but none of them carries an IP address.
pub fn resolve(
    selection: &ServerSelection,
    catalog: &Catalog,
    picker: &mut dyn Picker,
) -> Result<Connection, ResolveError> {
    let provider = catalog.provider;
    let vpn = *selection.kind.get();
    let protocol = selection
        .protocol
        .as_option()
        .copied()
        .unwrap_or_else(|| provider.default_protocol());
    let port = selection
        .port
        .as_option()
        .copied()
        .unwrap_or_else(|| provider.default_port(vpn, protocol));

    let servers = catalog.filter_servers(selection)?;

    let mut candidates = Vec::new();
    for server in servers {
        for &ip in &server.ips {
            // Catalogs may omit the certificate name; the DNS host name
            // then doubles as the OpenVPN identity.
            let hostname = if server.cert_name.is_empty() {
                server.hostname.clone()
            } else {
                server.cert_name.clone()
            };

            candidates.push(Connection {
                vpn,
                ip,
                port,
                protocol,
                hostname,
                pubkey: server.wg_pubkey.clone(),
            });
        }
    }

    if candidates.is_empty() {
        return Err(ResolveError::NoReachableAddress { provider });
    }

    let index = picker.pick(candidates.len());
    Ok(candidates.swap_remove(index))
}
