use crate::cap::EngineFingerprint;
use crate::error::EngineError;
use oxbind_api::models::GroupName;
use std::any::Any;
use std::io::{Read, Write};

/// An engine-produced handle bound to exactly one namespace group.
///
/// Immutable once constructed and safe for concurrent use; marshallers and
/// unmarshallers are created per call site and never shared.
pub trait BindingContext: EngineFingerprint + Send + Sync + std::fmt::Debug {
    fn group(&self) -> &GroupName;

    fn marshaller(&self) -> Result<Box<dyn Marshaller>, EngineError>;

    fn unmarshaller(&self) -> Result<Box<dyn Unmarshaller>, EngineError>;
}

/// Serializes one schema-bound value to a writer.
pub trait Marshaller {
    fn marshal(&mut self, value: &dyn Any, out: &mut dyn Write) -> Result<(), EngineError>;
}

/// Deserializes one schema-bound value from a reader.
pub trait Unmarshaller {
    fn unmarshal(&mut self, input: &mut dyn Read) -> Result<Box<dyn Any + Send>, EngineError>;
}
