use smol_str::SmolStr;

/// A value bound to one placeholder slot.
///
/// Values are carried as-is to the driver, nothing here escapes or checks
/// them. `Null` is an ordinary value and still occupies a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    StaticString(&'static str),
    Bool(bool),
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    #[cfg(feature = "json")]
    Json(serde_json::Value),
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),
    #[cfg(feature = "chrono")]
    ChronoDateTime(chrono::DateTime<chrono::Utc>),
    #[cfg(feature = "chrono")]
    ChronoNaiveDate(chrono::NaiveDate),
    #[cfg(feature = "time")]
    TimeOffsetDateTime(time::OffsetDateTime),
    #[cfg(feature = "time")]
    TimeDate(time::Date),
}

impl Value {
    pub fn new_static(value: &'static str) -> Self {
        Self::StaticString(value)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl<T> IntoValue for Option<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        if let Some(value) = self {
            value.into_value()
        } else {
            Value::Null
        }
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Null
    }
}

macro_rules! into_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )+
    };
}

into_value! {
    bool => Bool,
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    String => String,
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_owned())
    }
}

impl IntoValue for &String {
    fn into_value(self) -> Value {
        Value::String(self.clone())
    }
}

impl IntoValue for SmolStr {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

#[cfg(feature = "json")]
into_value! { serde_json::Value => Json }

#[cfg(feature = "uuid")]
into_value! { uuid::Uuid => Uuid }

#[cfg(feature = "chrono")]
into_value! {
    chrono::DateTime<chrono::Utc> => ChronoDateTime,
    chrono::NaiveDate => ChronoNaiveDate,
}

#[cfg(feature = "time")]
into_value! {
    time::OffsetDateTime => TimeOffsetDateTime,
    time::Date => TimeDate,
}

#[cfg(feature = "secrecy")]
impl IntoValue for secrecy::SecretString {
    fn into_value(self) -> Value {
        use secrecy::ExposeSecret;
        Value::String(self.expose_secret().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_into_null() {
        let none: Option<i32> = None;
        assert_eq!(Value::Null, none.into_value());
        assert_eq!(Value::I32(4), Some(4).into_value());
        assert!(().into_value().is_null());
    }

    #[test]
    fn test_strings() {
        assert_eq!(Value::String("lion".to_owned()), "lion".into_value());
        assert_eq!(Value::StaticString("zebra"), Value::new_static("zebra"));
        assert_eq!(Value::String("x".to_owned()), SmolStr::new("x").into_value());
    }
}
