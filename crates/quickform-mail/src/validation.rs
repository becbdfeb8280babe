use crate::{EmailError, EmailResult};

/// Validate an email address.
///
/// Deliberately permissive: one `@`, a non-empty local part and domain,
/// and no whitespace or control characters. Deliverability is the
/// transport's problem.
///
/// # Examples
///
/// ```
/// use quickform_mail::validation::validate_email;
///
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(validate_email("no-at-sign").is_err());
/// assert!(validate_email("two@@example.com").is_err());
/// ```
pub fn validate_email(address: &str) -> EmailResult<()> {
	if address.is_empty()
		|| address
			.chars()
			.any(|ch| ch.is_whitespace() || ch.is_control())
	{
		return Err(EmailError::InvalidAddress(address.to_string()));
	}

	match address.split_once('@') {
		Some((local, domain))
			if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
		{
			Ok(())
		}
		_ => Err(EmailError::InvalidAddress(address.to_string())),
	}
}

pub fn validate_email_list(addresses: &[String]) -> EmailResult<()> {
	for address in addresses {
		validate_email(address)?;
	}
	Ok(())
}

/// Reject values that would let a caller smuggle extra headers into the
/// outbound message.
pub fn check_header_injection(field_name: &str, value: &str) -> EmailResult<()> {
	if value.contains('\r') || value.contains('\n') {
		return Err(EmailError::HeaderInjection(field_name.to_string()));
	}
	Ok(())
}
