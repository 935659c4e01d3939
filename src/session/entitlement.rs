use super::store::{is_premium, KeyValueStore};
use crate::config::DocType;
use crate::error::{Error, Result};

/// Which documents the user may generate.
///
/// The privacy policy is always available. Everything else needs premium.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entitlement {
    pub premium: bool,
}

impl Entitlement {
    pub const FREE: Entitlement = Entitlement { premium: false };
    pub const PREMIUM: Entitlement = Entitlement { premium: true };

    pub fn from_store(store: &impl KeyValueStore) -> Self {
        Self { premium: is_premium(store) }
    }

    pub fn allows(&self, doc: DocType) -> bool {
        doc.is_free() || self.premium
    }

    /// Fails with [`Error::PremiumRequired`] for a locked document.
    pub fn require(&self, doc: DocType) -> Result<()> {
        if self.allows(doc) {
            Ok(())
        } else {
            Err(Error::PremiumRequired { document: doc.label().to_string() })
        }
    }

    /// Allowed documents in display order.
    pub fn documents(&self) -> Vec<DocType> {
        DocType::ALL.into_iter().filter(|doc| self.allows(*doc)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::{set_premium, MemoryStore};

    #[test]
    fn free_tier_only_gets_privacy() {
        assert_eq!(Entitlement::FREE.documents(), vec![DocType::Privacy]);
        assert!(Entitlement::FREE.require(DocType::Privacy).is_ok());
        assert!(matches!(
            Entitlement::FREE.require(DocType::Refund),
            Err(Error::PremiumRequired { document }) if document == "Refund Policy"
        ));
    }

    #[test]
    fn premium_gets_everything() {
        assert_eq!(Entitlement::PREMIUM.documents(), DocType::ALL.to_vec());
    }

    #[test]
    fn reads_flag_from_store() {
        let mut store = MemoryStore::new();
        assert_eq!(Entitlement::from_store(&store), Entitlement::FREE);
        set_premium(&mut store).unwrap();
        assert_eq!(Entitlement::from_store(&store), Entitlement::PREMIUM);
    }
}
