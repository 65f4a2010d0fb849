use super::addressable::Addressable;
use super::fragment::Fragment;
use crate::domain::fields::ContactFields;
use crate::domain::ports::DocumentSink;

/// The customer a request is made for, when it differs from the billing party.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Customer {
    contact: ContactFields,
}

impl Customer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Addressable for Customer {
    fn contact(&self) -> &ContactFields {
        &self.contact
    }

    fn contact_mut(&mut self) -> &mut ContactFields {
        &mut self.contact
    }
}

impl Fragment for Customer {
    fn compile<S: DocumentSink>(&self, sink: &mut S, parent: S::Node) -> bool {
        let mut appended = self.compile_name(sink, parent);
        appended |= self.compile_address(sink, parent);
        appended |= self.compile_telephone(sink, parent);
        tracing::debug!(fragment = "customer", appended, "compiled fragment");
        appended
    }
}
