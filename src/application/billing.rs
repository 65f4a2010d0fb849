use super::addressable::Addressable;
use super::fragment::Fragment;
use crate::domain::expiry::ExpiryDate;
use crate::domain::fields::{AmountGroup, ContactFields, Group, PaymentGroup, PaymentKey};
use crate::domain::money::{self, DEFAULT_CURRENCY};
use crate::domain::ports::DocumentSink;
use crate::domain::record::BillingRecord;
use crate::error::Result;
use rust_decimal::Decimal;

/// The party paying for a transaction: who owns the card, where they live, and
/// what is being charged.
///
/// Names and addresses should match the ones registered with the card issuer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Billing {
    contact: ContactFields,
    amount: Option<AmountGroup>,
    payment: Option<PaymentGroup>,
}

impl Billing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `group` has been touched by any setter.
    pub fn has(&self, group: Group) -> bool {
        match group {
            Group::Amount => self.amount.is_some(),
            Group::Payment => self.payment.is_some(),
            _ => self.contact.has(group),
        }
    }

    pub fn amount_group(&self) -> Option<&AmountGroup> {
        self.amount.as_ref()
    }

    pub fn payment_group(&self) -> Option<&PaymentGroup> {
        self.payment.as_ref()
    }

    /// Sets the transaction amount in major units; it is stored in whole minor
    /// units (`12.34` becomes `1234`). The currency defaults to GBP unless one
    /// was already chosen.
    pub fn set_amount(&mut self, amount: Decimal) -> Result<&mut Self> {
        let value = money::to_minor_units(amount)?;
        let group = self.amount.get_or_insert_with(AmountGroup::default);
        group.apply_default_currency(DEFAULT_CURRENCY);
        group.value = Some(value);
        Ok(self)
    }

    /// Parses a decimal amount such as `"12.50"` and sets it like [`Billing::set_amount`].
    pub fn set_amount_str(&mut self, amount: &str) -> Result<&mut Self> {
        let amount = money::parse_amount(amount)?;
        self.set_amount(amount)
    }

    /// Sets the ISO currency code the transaction is performed in.
    pub fn set_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.amount
            .get_or_insert_with(AmountGroup::default)
            .currency_code = Some(currency.into());
        self
    }

    /// Sets the card scheme, e.g. `VISA` or `MASTERCARD`. Always upper-cased.
    pub fn set_payment_type(&mut self, kind: &str) -> &mut Self {
        self.payment_mut()
            .set(PaymentKey::Type, kind.to_uppercase());
        self
    }

    /// Sets the card number. Spaces and hyphens are removed.
    pub fn set_payment_card_number(&mut self, number: &str) -> &mut Self {
        let pan: String = number.chars().filter(|c| *c != ' ' && *c != '-').collect();
        self.payment_mut().set(PaymentKey::Pan, pan);
        self
    }

    /// Sets the card expiry date, stored as `MM/YYYY`.
    ///
    /// Accepts a `(month, year)` pair, a keyed month/year, a Unix timestamp or a
    /// preformatted string; see [`ExpiryDate`].
    pub fn set_payment_expiry_date(&mut self, expiry: impl Into<ExpiryDate>) -> Result<&mut Self> {
        let formatted = expiry.into().normalize()?;
        self.payment_mut().set(PaymentKey::ExpiryDate, formatted);
        Ok(self)
    }

    pub fn set_payment_security_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.payment_mut().set(PaymentKey::SecurityCode, code.into());
        self
    }

    /// Applies every populated field of `record` through the setters above.
    pub fn apply(&mut self, record: &BillingRecord) -> Result<&mut Self> {
        if let Some(prefix) = &record.name_prefix {
            self.set_name_prefix(prefix.as_str());
        }
        if let Some(first) = &record.first_name {
            self.set_first_name(first.as_str());
        }
        if let Some(middle) = &record.middle_name {
            self.set_middle_name(middle.as_str());
        }
        if let Some(last) = &record.last_name {
            self.set_last_name(last.as_str());
        }
        if let Some(suffix) = &record.name_suffix {
            self.set_name_suffix(suffix.as_str());
        }
        if let Some(premise) = &record.premise {
            self.set_premise(premise.as_str());
        }
        if let Some(street) = &record.street {
            self.set_street(street.as_str());
        }
        if let Some(town) = &record.town {
            self.set_town(town.as_str());
        }
        if let Some(county) = &record.county {
            self.set_county(county.as_str());
        }
        if let Some(postcode) = &record.postcode {
            self.set_postcode(postcode.as_str());
        }
        if let Some(country) = &record.country {
            self.set_country(country.as_str());
        }
        if let Some(email) = &record.email {
            self.set_email(email.as_str());
        }
        // Type first, so an explicit type is not replaced by the default.
        if let Some(kind) = &record.telephone_type {
            self.set_telephone_type(kind.as_str());
        }
        if let Some(number) = &record.telephone {
            self.set_telephone(number.as_str());
        }

        if let Some(currency) = &record.currency {
            self.set_currency(currency.as_str());
        }
        if let Some(amount) = record.amount {
            self.set_amount(amount)?;
        }
        if let Some(kind) = &record.payment_type {
            self.set_payment_type(kind);
        }
        if let Some(pan) = &record.pan {
            self.set_payment_card_number(pan);
        }
        if let Some(expiry) = &record.expiry_date {
            self.set_payment_expiry_date(expiry.clone())?;
        }
        if let Some(code) = &record.security_code {
            self.set_payment_security_code(code.as_str());
        }
        Ok(self)
    }

    fn payment_mut(&mut self) -> &mut PaymentGroup {
        self.payment.get_or_insert_with(PaymentGroup::default)
    }

    fn compile_amount<S: DocumentSink>(&self, sink: &mut S, parent: S::Node) -> bool {
        let Some(amount) = &self.amount else {
            return false;
        };
        let value = amount.value.as_deref().map(|v| sink.escape(v));
        let node = sink.add_child(parent, "amount", value.as_deref());
        if let Some(currency) = &amount.currency_code {
            let escaped = sink.escape(currency);
            sink.add_attribute(node, "currencycode", &escaped);
        }
        true
    }

    /// Emits the `payment` node: the card type as its `type` attribute, every
    /// other present sub-key as a child, alphabetically.
    fn compile_payment<S: DocumentSink>(&self, sink: &mut S, parent: S::Node) -> bool {
        let Some(payment) = &self.payment else {
            return false;
        };
        let node = sink.add_child(parent, "payment", None);
        if let Some(kind) = payment.get(PaymentKey::Type) {
            let escaped = sink.escape(kind);
            sink.add_attribute(node, "type", &escaped);
        }
        for (key, value) in payment.child_entries() {
            let escaped = sink.escape(value);
            sink.add_child(node, key, Some(&escaped));
        }
        true
    }
}

impl Addressable for Billing {
    fn contact(&self) -> &ContactFields {
        &self.contact
    }

    fn contact_mut(&mut self) -> &mut ContactFields {
        &mut self.contact
    }
}

impl Fragment for Billing {
    fn compile<S: DocumentSink>(&self, sink: &mut S, parent: S::Node) -> bool {
        let mut appended = self.compile_name(sink, parent);
        appended |= self.compile_address(sink, parent);
        appended |= self.compile_telephone(sink, parent);
        appended |= self.compile_amount(sink, parent);
        appended |= self.compile_payment(sink, parent);
        tracing::debug!(fragment = "billing", appended, "compiled fragment");
        appended
    }
}
