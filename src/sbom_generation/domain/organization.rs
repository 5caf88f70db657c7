/// Organization metadata stamped into the CPE of every project component.
///
/// Read once at start-up and handed to the component assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationMetadata {
    pub vendor: Option<String>,
    pub product_name: Option<String>,
    pub product_version: Option<String>,
}

impl OrganizationMetadata {
    pub const VENDOR_VAR: &'static str = "VENDOR";
    pub const PRODUCT_NAME_VAR: &'static str = "PRODUCTNAME";
    pub const PRODUCT_VERSION_VAR: &'static str = "PRODUCTVERSION";

    pub fn new(
        vendor: Option<String>,
        product_name: Option<String>,
        product_version: Option<String>,
    ) -> Self {
        Self {
            vendor,
            product_name,
            product_version,
        }
    }

    /// Reads `VENDOR`, `PRODUCTNAME` and `PRODUCTVERSION` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the metadata from an arbitrary key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            vendor: read(Self::VENDOR_VAR),
            product_name: read(Self::PRODUCT_NAME_VAR),
            product_version: read(Self::PRODUCT_VERSION_VAR),
        }
    }

    /// Returns `self` with every field set in `overrides` replaced
    pub fn merged_with(self, overrides: OrganizationMetadata) -> Self {
        Self {
            vendor: overrides.vendor.or(self.vendor),
            product_name: overrides.product_name.or(self.product_name),
            product_version: overrides.product_version.or(self.product_version),
        }
    }
}
