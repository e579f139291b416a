/// A free-text postal address as it was supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for Address {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Address {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<Address> for String {
    fn from(from: Address) -> Self {
        from.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the uploaded address list.
///
/// Rows without an address are kept so that callers can
/// count them, but they are never resolved.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressRow {
    pub address : Option<Address>,
}

impl AddressRow {
    pub fn new(address: impl Into<Address>) -> Self {
        Self {
            address: Some(address.into()),
        }
    }

    /// The address if it is present and not blank.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref().filter(|addr| !addr.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.address().is_none()
    }
}
