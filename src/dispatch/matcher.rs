//! src/dispatch/matcher.rs
//! Assign request descriptors to the session's cipher and mac roles

use super::descriptor::OpDescriptor;
use crate::consts::MAX_CHAIN_LEN;
use crate::error::CryptocteonError;
use crate::session::Session;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MatchedChain<'r> {
    pub enc: Option<&'r OpDescriptor>,
    pub mac: Option<&'r OpDescriptor>,
}

/// Every descriptor must fill exactly one open role, and every role the session
/// binds must be filled.
pub(crate) fn match_descriptors<'r>(
    session: &Session,
    chain: &'r [OpDescriptor],
) -> Result<MatchedChain<'r>, CryptocteonError> {
    if chain.is_empty() {
        return Err("missing descriptor chain".into());
    }
    if chain.len() > MAX_CHAIN_LEN {
        return Err(CryptocteonError::InvalidArgument(format!(
            "chain of {} descriptors exceeds {MAX_CHAIN_LEN}",
            chain.len()
        )));
    }

    let enc_id = session.cipher().map(|c| c.id());
    let mac_id = session.mac().map(|m| m.id());

    let mut matched = MatchedChain::default();
    for desc in chain {
        if Some(desc.algorithm) == enc_id && matched.enc.is_none() {
            matched.enc = Some(desc);
        } else if Some(desc.algorithm) == mac_id && matched.mac.is_none() {
            matched.mac = Some(desc);
        } else {
            return Err(CryptocteonError::InvalidArgument(format!(
                "descriptors do not match session ({} is not an open role)",
                desc.algorithm
            )));
        }
    }

    if enc_id.is_some() && matched.enc.is_none() {
        return Err("descriptors do not match session (cipher descriptor missing)".into());
    }
    if mac_id.is_some() && matched.mac.is_none() {
        return Err("descriptors do not match session (mac descriptor missing)".into());
    }
    Ok(matched)
}
