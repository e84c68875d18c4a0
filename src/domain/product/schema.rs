//! Field rules for product payloads.
//!
//! Rules run in a fixed order (name, description, price, category, stock). Every failure is
//! collected; the first one is the message reported to callers.

use super::{NewProduct, ProductPatch};
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const DEFAULT_STOCK: i64 = 0;

pub const NAME_REQUIRED: &str = "Product name is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const PRICE_REQUIRED: &str = "Path `price` is required.";
pub const NOT_AN_OBJECT: &str = "Product payload must be a JSON object";

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", first_message(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn first_message(errors: &[FieldError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("Validation failed")
}

impl ValidationErrors {
    fn single(field: &'static str, message: &str) -> Self {
        Self {
            errors: vec![FieldError {
                field,
                message: message.to_string(),
            }],
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn message(&self) -> &str {
        first_message(&self.errors)
    }
}

/// Whether a missing key means "use the default" (create) or "keep the stored value" (update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Patch,
}

struct TextRule {
    field: &'static str,
    required: Option<&'static str>,
    default: Option<&'static str>,
}

struct NumberRule {
    field: &'static str,
    required: &'static str,
}

struct IntegerRule {
    field: &'static str,
    min: i64,
    default: i64,
}

const NAME: TextRule = TextRule {
    field: "name",
    required: Some(NAME_REQUIRED),
    default: None,
};

const DESCRIPTION: TextRule = TextRule {
    field: "description",
    required: Some(DESCRIPTION_REQUIRED),
    default: None,
};

const PRICE: NumberRule = NumberRule {
    field: "price",
    required: PRICE_REQUIRED,
};

const CATEGORY: TextRule = TextRule {
    field: "category",
    required: None,
    default: Some(DEFAULT_CATEGORY),
};

const STOCK: IntegerRule = IntegerRule {
    field: "stock",
    min: 0,
    default: DEFAULT_STOCK,
};

impl TextRule {
    fn check(&self, raw: Option<&JsonValue>, mode: Mode) -> Result<Option<String>, FieldError> {
        let text = match raw {
            None if mode == Mode::Patch => return Ok(None),
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(s)) if s.contains('\0') => {
                return Err(self.error(&format!(
                    "Path `{}` must not contain NUL characters.",
                    self.field
                )))
            }
            Some(JsonValue::String(s)) => Some(s.clone()),
            Some(v @ (JsonValue::Number(_) | JsonValue::Bool(_))) => Some(v.to_string()),
            Some(v) => return Err(cast_error("string", self.field, v)),
        };

        match (text, self.required, self.default) {
            (Some(s), Some(msg), _) if s.is_empty() => Err(self.error(msg)),
            (Some(s), _, _) => Ok(Some(s)),
            (None, Some(msg), _) => Err(self.error(msg)),
            (None, None, default) => Ok(Some(default.unwrap_or_default().to_string())),
        }
    }

    fn error(&self, message: &str) -> FieldError {
        FieldError {
            field: self.field,
            message: message.to_string(),
        }
    }
}

impl NumberRule {
    fn check(&self, raw: Option<&JsonValue>, mode: Mode) -> Result<Option<f64>, FieldError> {
        let value = match raw {
            None if mode == Mode::Patch => return Ok(None),
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(s)) if s.trim().is_empty() => None,
            Some(v @ JsonValue::Number(n)) => {
                Some(n.as_f64().ok_or_else(|| cast_error("Number", self.field, v))?)
            }
            Some(v @ JsonValue::String(s)) => Some(
                s.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| cast_error("Number", self.field, v))?,
            ),
            Some(v) => return Err(cast_error("Number", self.field, v)),
        };

        value.map(Some).ok_or_else(|| FieldError {
            field: self.field,
            message: self.required.to_string(),
        })
    }
}

impl IntegerRule {
    fn check(&self, raw: Option<&JsonValue>, mode: Mode) -> Result<Option<i64>, FieldError> {
        let value = match raw {
            None if mode == Mode::Patch => return Ok(None),
            None | Some(JsonValue::Null) => self.default,
            Some(JsonValue::String(s)) if s.trim().is_empty() => self.default,
            Some(v @ JsonValue::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(whole_i64))
                .ok_or_else(|| cast_error("Number", self.field, v))?,
            Some(v @ JsonValue::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| cast_error("Number", self.field, v))?,
            Some(v) => return Err(cast_error("Number", self.field, v)),
        };

        if value < self.min {
            return Err(FieldError {
                field: self.field,
                message: format!(
                    "Path `{}` ({}) is less than minimum allowed value ({}).",
                    self.field, value, self.min
                ),
            });
        }
        Ok(Some(value))
    }
}

/// Integral floats that fit in `i64` exactly; `2^63` itself is out of range.
fn whole_i64(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (in_range && f.fract() == 0.0).then_some(f as i64)
}

fn cast_error(target: &str, field: &'static str, value: &JsonValue) -> FieldError {
    let (shown, kind) = match value {
        JsonValue::String(s) => (s.clone(), "string"),
        JsonValue::Number(n) => (n.to_string(), "number"),
        JsonValue::Bool(b) => (b.to_string(), "boolean"),
        JsonValue::Array(_) => (value.to_string(), "Array"),
        JsonValue::Object(_) => (value.to_string(), "Object"),
        JsonValue::Null => ("null".to_string(), "null"),
    };
    FieldError {
        field,
        message: format!(
            "Cast to {} failed for value \"{}\" (type {}) at path \"{}\"",
            target, shown, kind, field
        ),
    }
}

#[derive(Default)]
struct Collector {
    errors: Vec<FieldError>,
}

impl Collector {
    fn take<T>(&mut self, result: Result<Option<T>, FieldError>) -> Option<T> {
        match result {
            Ok(v) => v,
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

fn as_object(payload: &JsonValue) -> Result<&Map<String, JsonValue>, ValidationErrors> {
    payload
        .as_object()
        .ok_or_else(|| ValidationErrors::single("<record>", NOT_AN_OBJECT))
}

/// Validates a candidate record for creation, filling in defaults.
///
/// Unknown keys (including `_id` and the timestamps) are ignored.
pub fn validate_new(payload: &JsonValue) -> Result<NewProduct, ValidationErrors> {
    let obj = as_object(payload)?;
    let mut c = Collector::default();

    let name = c.take(NAME.check(obj.get(NAME.field), Mode::Create));
    let description = c.take(DESCRIPTION.check(obj.get(DESCRIPTION.field), Mode::Create));
    let price = c.take(PRICE.check(obj.get(PRICE.field), Mode::Create));
    let category = c.take(CATEGORY.check(obj.get(CATEGORY.field), Mode::Create));
    let stock = c.take(STOCK.check(obj.get(STOCK.field), Mode::Create));
    c.finish()?;

    match (name, description, price) {
        (Some(name), Some(description), Some(price)) => Ok(NewProduct {
            name,
            description,
            price,
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            stock: stock.unwrap_or(DEFAULT_STOCK),
        }),
        _ => Err(ValidationErrors::single("<record>", "Product validation failed")),
    }
}

/// Validates the fields present in an update body.
///
/// Absent fields keep their stored (already valid) values, so checking each present field
/// with the create rules validates the merged record.
pub fn validate_patch(payload: &JsonValue) -> Result<ProductPatch, ValidationErrors> {
    let obj = as_object(payload)?;
    let mut c = Collector::default();

    let patch = ProductPatch {
        name: c.take(NAME.check(obj.get(NAME.field), Mode::Patch)),
        description: c.take(DESCRIPTION.check(obj.get(DESCRIPTION.field), Mode::Patch)),
        price: c.take(PRICE.check(obj.get(PRICE.field), Mode::Patch)),
        category: c.take(CATEGORY.check(obj.get(CATEGORY.field), Mode::Patch)),
        stock: c.take(STOCK.check(obj.get(STOCK.field), Mode::Patch)),
    };
    c.finish()?;
    Ok(patch)
}
