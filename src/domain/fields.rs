//! Typed field groups accumulated by the fragments.
//!
//! A group is present once any of its setters has been called, and presence alone
//! decides whether compilation emits a node for it. Nested groups are `Option`s in
//! their owner; the address scalars are each their own group.

/// Every group a fragment can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Name,
    Telephone,
    Premise,
    Street,
    Town,
    County,
    Postcode,
    Country,
    Email,
    Amount,
    Payment,
}

/// Address scalars, stored directly under their own group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKey {
    Premise,
    Street,
    Town,
    County,
    Postcode,
    Country,
    Email,
}

impl AddressKey {
    /// Emission order of the address scalars.
    pub const ALL: [AddressKey; 7] = [
        AddressKey::Premise,
        AddressKey::Street,
        AddressKey::Town,
        AddressKey::County,
        AddressKey::Postcode,
        AddressKey::Country,
        AddressKey::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKey::Premise => "premise",
            AddressKey::Street => "street",
            AddressKey::Town => "town",
            AddressKey::County => "county",
            AddressKey::Postcode => "postcode",
            AddressKey::Country => "country",
            AddressKey::Email => "email",
        }
    }

    pub fn group(&self) -> Group {
        match self {
            AddressKey::Premise => Group::Premise,
            AddressKey::Street => Group::Street,
            AddressKey::Town => Group::Town,
            AddressKey::County => Group::County,
            AddressKey::Postcode => Group::Postcode,
            AddressKey::Country => Group::Country,
            AddressKey::Email => Group::Email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKey {
    Prefix,
    First,
    Middle,
    Last,
    Suffix,
}

impl NameKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameKey::Prefix => "prefix",
            NameKey::First => "first",
            NameKey::Middle => "middle",
            NameKey::Last => "last",
            NameKey::Suffix => "suffix",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKey {
    Type,
    Pan,
    ExpiryDate,
    SecurityCode,
}

impl PaymentKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKey::Type => "type",
            PaymentKey::Pan => "pan",
            PaymentKey::ExpiryDate => "expirydate",
            PaymentKey::SecurityCode => "securitycode",
        }
    }
}

/// Sorts present sub-keys by name so emission order never depends on call order.
fn sorted<'a>(mut entries: Vec<(&'static str, &'a str)>) -> Vec<(&'static str, &'a str)> {
    entries.sort_by_key(|(key, _)| *key);
    entries
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NameGroup {
    pub prefix: Option<String>,
    pub first: Option<String>,
    pub middle: Option<String>,
    pub last: Option<String>,
    pub suffix: Option<String>,
}

impl NameGroup {
    pub fn set(&mut self, key: NameKey, value: String) {
        let slot = match key {
            NameKey::Prefix => &mut self.prefix,
            NameKey::First => &mut self.first,
            NameKey::Middle => &mut self.middle,
            NameKey::Last => &mut self.last,
            NameKey::Suffix => &mut self.suffix,
        };
        *slot = Some(value);
    }

    pub fn get(&self, key: NameKey) -> Option<&str> {
        match key {
            NameKey::Prefix => self.prefix.as_deref(),
            NameKey::First => self.first.as_deref(),
            NameKey::Middle => self.middle.as_deref(),
            NameKey::Last => self.last.as_deref(),
            NameKey::Suffix => self.suffix.as_deref(),
        }
    }

    /// Present sub-keys with their values, alphabetically by sub-key.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let keys = [
            NameKey::Prefix,
            NameKey::First,
            NameKey::Middle,
            NameKey::Last,
            NameKey::Suffix,
        ];
        sorted(
            keys.iter()
                .filter_map(|key| self.get(*key).map(|value| (key.as_str(), value)))
                .collect(),
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TelephoneGroup {
    pub number: Option<String>,
    pub kind: Option<String>,
}

impl TelephoneGroup {
    /// Telephone type written when none was chosen: home.
    pub const DEFAULT_KIND: &'static str = "H";

    /// Writes the default type unless a non-empty one is already set.
    pub fn apply_default_kind(&mut self) {
        if self.kind.as_deref().is_none_or(str::is_empty) {
            self.kind = Some(Self::DEFAULT_KIND.to_string());
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AmountGroup {
    /// Amount in minor currency units, no decimal point.
    pub value: Option<String>,
    pub currency_code: Option<String>,
}

impl AmountGroup {
    /// Writes `default` as the currency unless a non-empty one is already set.
    pub fn apply_default_currency(&mut self, default: &str) {
        if self.currency_code.as_deref().is_none_or(str::is_empty) {
            self.currency_code = Some(default.to_string());
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PaymentGroup {
    pub kind: Option<String>,
    pub pan: Option<String>,
    pub expiry_date: Option<String>,
    pub security_code: Option<String>,
}

impl PaymentGroup {
    pub fn set(&mut self, key: PaymentKey, value: String) {
        let slot = match key {
            PaymentKey::Type => &mut self.kind,
            PaymentKey::Pan => &mut self.pan,
            PaymentKey::ExpiryDate => &mut self.expiry_date,
            PaymentKey::SecurityCode => &mut self.security_code,
        };
        *slot = Some(value);
    }

    pub fn get(&self, key: PaymentKey) -> Option<&str> {
        match key {
            PaymentKey::Type => self.kind.as_deref(),
            PaymentKey::Pan => self.pan.as_deref(),
            PaymentKey::ExpiryDate => self.expiry_date.as_deref(),
            PaymentKey::SecurityCode => self.security_code.as_deref(),
        }
    }

    /// Present sub-keys other than `type`, alphabetically by sub-key.
    ///
    /// The card type goes on the payment node as an attribute instead.
    pub fn child_entries(&self) -> Vec<(&'static str, &str)> {
        let keys = [
            PaymentKey::Pan,
            PaymentKey::ExpiryDate,
            PaymentKey::SecurityCode,
        ];
        sorted(
            keys.iter()
                .filter_map(|key| self.get(*key).map(|value| (key.as_str(), value)))
                .collect(),
        )
    }
}

/// Groups shared by every fragment that describes a person at an address.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContactFields {
    pub name: Option<NameGroup>,
    pub telephone: Option<TelephoneGroup>,
    premise: Option<String>,
    street: Option<String>,
    town: Option<String>,
    county: Option<String>,
    postcode: Option<String>,
    country: Option<String>,
    email: Option<String>,
}

impl ContactFields {
    pub fn set_scalar(&mut self, key: AddressKey, value: String) {
        *self.scalar_slot(key) = Some(value);
    }

    pub fn scalar(&self, key: AddressKey) -> Option<&str> {
        match key {
            AddressKey::Premise => self.premise.as_deref(),
            AddressKey::Street => self.street.as_deref(),
            AddressKey::Town => self.town.as_deref(),
            AddressKey::County => self.county.as_deref(),
            AddressKey::Postcode => self.postcode.as_deref(),
            AddressKey::Country => self.country.as_deref(),
            AddressKey::Email => self.email.as_deref(),
        }
    }

    /// Returns the name group, creating it empty on first use.
    pub fn name_mut(&mut self) -> &mut NameGroup {
        self.name.get_or_insert_with(NameGroup::default)
    }

    /// Returns the telephone group, creating it empty on first use.
    pub fn telephone_mut(&mut self) -> &mut TelephoneGroup {
        self.telephone.get_or_insert_with(TelephoneGroup::default)
    }

    /// Whether `group` has been touched. Groups this component does not own are
    /// never present.
    pub fn has(&self, group: Group) -> bool {
        match group {
            Group::Name => self.name.is_some(),
            Group::Telephone => self.telephone.is_some(),
            Group::Amount | Group::Payment => false,
            _ => AddressKey::ALL
                .iter()
                .find(|key| key.group() == group)
                .is_some_and(|key| self.scalar(*key).is_some()),
        }
    }

    fn scalar_slot(&mut self, key: AddressKey) -> &mut Option<String> {
        match key {
            AddressKey::Premise => &mut self.premise,
            AddressKey::Street => &mut self.street,
            AddressKey::Town => &mut self.town,
            AddressKey::County => &mut self.county,
            AddressKey::Postcode => &mut self.postcode,
            AddressKey::Country => &mut self.country,
            AddressKey::Email => &mut self.email,
        }
    }
}
