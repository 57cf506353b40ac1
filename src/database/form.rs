use std::collections::HashMap;

use serde_json::Value;

use crate::error::{ApiError, TypeError};

pub type FormData = HashMap<String, Value>;

pub struct Form {
    inner: HashMap<String, Value>,
}

impl Form {
    pub fn from_data(data: FormData) -> Self {
        Self { inner: data }
    }

    pub fn has(&self, key: &str) -> bool {
        matches!(self.inner.get(key), Some(value) if !value.is_null())
    }

    pub fn get_value<T>(&self, key: &str) -> Result<T, ApiError>
    where
        T: TryFrom<Value>,
        T::Error: Into<ApiError>,
    {
        match self.inner.get(key) {
            Some(value) => value.to_owned().try_into().map_err(|e: T::Error| e.into()),
            None => Err(TypeError::new("Invalid key").into()),
        }
    }

    pub fn get_value_opt<T>(&self, key: &str) -> Result<Option<T>, ApiError>
    where
        T: TryFrom<Value>,
        T::Error: Into<ApiError>,
    {
        match self.inner.get(key) {
            Some(value) if !value.is_null() => value
                .to_owned()
                .try_into()
                .map(Some)
                .map_err(|e: T::Error| e.into()),
            _ => Ok(None),
        }
    }

    pub fn get_str(&self, key: &str) -> Result<String, TypeError> {
        match self.inner.get(key) {
            Some(value) => match value.as_str() {
                Some(v) => Ok(v.to_string()),
                None => Err(TypeError::new("Invalid key")),
            },
            None => Err(TypeError::new("Invalid key")),
        }
    }

    pub fn get_bool_opt(&self, key: &str) -> Result<Option<bool>, TypeError> {
        match self.inner.get(key) {
            Some(Value::Bool(v)) => Ok(Some(*v)),
            Some(Value::Null) | None => Ok(None),
            Some(_) => Err(TypeError::new("Failed to parse value as bool")),
        }
    }
}
