use crate::domain::fields::{AddressKey, ContactFields, NameKey};
use crate::domain::ports::DocumentSink;

/// Name, address and telephone handling shared by billing and customer fragments.
///
/// Implementors embed a [`ContactFields`] and expose it; every setter and compile
/// step here works on that component. Setters return the fragment so calls chain.
pub trait Addressable: Sized {
    fn contact(&self) -> &ContactFields;
    fn contact_mut(&mut self) -> &mut ContactFields;

    fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.contact_mut().set_scalar(AddressKey::Email, email.into());
        self
    }

    fn set_premise(&mut self, premise: impl Into<String>) -> &mut Self {
        self.contact_mut()
            .set_scalar(AddressKey::Premise, premise.into());
        self
    }

    fn set_street(&mut self, street: impl Into<String>) -> &mut Self {
        self.contact_mut().set_scalar(AddressKey::Street, street.into());
        self
    }

    fn set_town(&mut self, town: impl Into<String>) -> &mut Self {
        self.contact_mut().set_scalar(AddressKey::Town, town.into());
        self
    }

    fn set_county(&mut self, county: impl Into<String>) -> &mut Self {
        self.contact_mut().set_scalar(AddressKey::County, county.into());
        self
    }

    /// Sets the post or zip code.
    fn set_postcode(&mut self, postcode: impl Into<String>) -> &mut Self {
        self.contact_mut()
            .set_scalar(AddressKey::Postcode, postcode.into());
        self
    }

    fn set_country(&mut self, country: impl Into<String>) -> &mut Self {
        self.contact_mut()
            .set_scalar(AddressKey::Country, country.into());
        self
    }

    fn set_name_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.contact_mut().name_mut().set(NameKey::Prefix, prefix.into());
        self
    }

    fn set_first_name(&mut self, first: impl Into<String>) -> &mut Self {
        self.contact_mut().name_mut().set(NameKey::First, first.into());
        self
    }

    fn set_middle_name(&mut self, middle: impl Into<String>) -> &mut Self {
        self.contact_mut().name_mut().set(NameKey::Middle, middle.into());
        self
    }

    fn set_last_name(&mut self, last: impl Into<String>) -> &mut Self {
        self.contact_mut().name_mut().set(NameKey::Last, last.into());
        self
    }

    fn set_name_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.contact_mut().name_mut().set(NameKey::Suffix, suffix.into());
        self
    }

    /// Sets the telephone number. The type defaults to home (`H`) unless one
    /// was already chosen.
    fn set_telephone(&mut self, number: impl Into<String>) -> &mut Self {
        let telephone = self.contact_mut().telephone_mut();
        telephone.apply_default_kind();
        telephone.number = Some(number.into());
        self
    }

    /// Sets the telephone type: `H`, `M` or `W` for home, mobile or work.
    ///
    /// Other values are stored and emitted unchanged.
    fn set_telephone_type(&mut self, kind: impl Into<String>) -> &mut Self {
        self.contact_mut().telephone_mut().kind = Some(kind.into());
        self
    }

    /// Emits a `name` node with one child per present sub-key, alphabetically.
    fn compile_name<S: DocumentSink>(&self, sink: &mut S, parent: S::Node) -> bool {
        let Some(name) = &self.contact().name else {
            return false;
        };
        let node = sink.add_child(parent, "name", None);
        for (key, value) in name.entries() {
            let escaped = sink.escape(value);
            sink.add_child(node, key, Some(&escaped));
        }
        true
    }

    /// Emits each present address scalar as its own node.
    fn compile_address<S: DocumentSink>(&self, sink: &mut S, parent: S::Node) -> bool {
        let mut appended = false;
        for key in AddressKey::ALL {
            if let Some(value) = self.contact().scalar(key) {
                let escaped = sink.escape(value);
                sink.add_child(parent, key.as_str(), Some(&escaped));
                appended = true;
            }
        }
        appended
    }

    fn compile_telephone<S: DocumentSink>(&self, sink: &mut S, parent: S::Node) -> bool {
        let Some(telephone) = &self.contact().telephone else {
            return false;
        };
        let number = telephone.number.as_deref().map(|n| sink.escape(n));
        let node = sink.add_child(parent, "telephone", number.as_deref());
        if let Some(kind) = &telephone.kind {
            let escaped = sink.escape(kind);
            sink.add_attribute(node, "type", &escaped);
        }
        true
    }
}
