//! Deferred values.
//!
//! A [`Value`] is either known while the stack is being defined or deferred
//! until deployment. Deferred values carry a [`Token`], the CloudFormation
//! expression that resolves them.

use std::fmt;

use serde_json::{json, Value as Json};

/// Service prefix of a dynamic reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicReferenceService {
    /// Plain SSM parameter (`ssm`).
    Ssm,
    /// SecureString SSM parameter (`ssm-secure`).
    SsmSecure,
}

impl DynamicReferenceService {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ssm => "ssm",
            Self::SsmSecure => "ssm-secure",
        }
    }
}

/// A `{{resolve:service:key}}` placeholder resolved by CloudFormation.
///
/// The key may itself be deferred, in which case the placeholder is
/// assembled with `Fn::Join` at deploy time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DynamicReference {
    service: DynamicReferenceService,
    key: Box<Value<String>>,
}

impl DynamicReference {
    pub fn new(service: DynamicReferenceService, key: impl Into<Value<String>>) -> Self {
        Self {
            service,
            key: Box::new(key.into()),
        }
    }

    pub fn service(&self) -> DynamicReferenceService {
        self.service
    }

    /// Reference key, e.g. `name:version`.
    pub fn key(&self) -> &Value<String> {
        &self.key
    }

    /// The placeholder as a string value.
    pub fn to_value(&self) -> Value<String> {
        match self.key.as_ref() {
            Value::Known(_) => Value::Deferred(Token::Dynamic(self.clone())),
            Value::Deferred(_) => join([
                Value::from(format!("{{{{resolve:{}:", self.service.as_str())),
                self.key.as_ref().clone(),
                Value::from("}}"),
            ]),
        }
    }
}

impl fmt::Display for DynamicReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{{resolve:{}:{}}}}}",
            self.service.as_str(),
            self.key.display()
        )
    }
}

/// A piece of a joined string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fragment {
    Literal(String),
    Token(Token),
}

/// A deploy-time expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `{"Ref": name}`, also used for pseudo parameters like `AWS::Region`.
    Ref(String),
    /// `{"Fn::GetAtt": [logical_id, attribute]}`.
    GetAtt {
        logical_id: String,
        attribute: String,
    },
    /// `{"Fn::Join": ["", parts]}`.
    Join(Vec<Fragment>),
    /// `{"Fn::Join": [delimiter, list]}` over a list-valued token.
    JoinList {
        delimiter: String,
        list: Box<Token>,
    },
    /// `{"Fn::Split": [delimiter, source]}`.
    Split {
        delimiter: String,
        source: Box<Token>,
    },
    /// `{{resolve:...}}` string.
    Dynamic(DynamicReference),
}

impl Token {
    pub fn pseudo_partition() -> Self {
        Self::Ref("AWS::Partition".to_string())
    }

    pub fn pseudo_region() -> Self {
        Self::Ref("AWS::Region".to_string())
    }

    pub fn pseudo_account() -> Self {
        Self::Ref("AWS::AccountId".to_string())
    }

    /// Render the token as a CloudFormation intrinsic.
    pub fn to_json(&self) -> Json {
        match self {
            Self::Ref(name) => json!({ "Ref": name }),
            Self::GetAtt {
                logical_id,
                attribute,
            } => json!({ "Fn::GetAtt": [logical_id, attribute] }),
            Self::Join(parts) => {
                let parts: Vec<Json> = parts
                    .iter()
                    .map(|part| match part {
                        Fragment::Literal(s) => Json::String(s.clone()),
                        Fragment::Token(t) => t.to_json(),
                    })
                    .collect();
                json!({ "Fn::Join": ["", parts] })
            }
            Self::JoinList { delimiter, list } => {
                json!({ "Fn::Join": [delimiter, list.to_json()] })
            }
            Self::Split { delimiter, source } => {
                json!({ "Fn::Split": [delimiter, source.to_json()] })
            }
            Self::Dynamic(reference) => match reference.key() {
                Value::Known(_) => Json::String(reference.to_string()),
                Value::Deferred(_) => reference.to_value().to_json(),
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ref(name) => write!(f, "${{Token[Ref:{}]}}", name),
            Self::GetAtt {
                logical_id,
                attribute,
            } => write!(f, "${{Token[{}.{}]}}", logical_id, attribute),
            Self::Join(parts) => {
                for part in parts {
                    match part {
                        Fragment::Literal(s) => f.write_str(s)?,
                        Fragment::Token(t) => write!(f, "{}", t)?,
                    }
                }
                Ok(())
            }
            Self::JoinList { delimiter, list } => {
                write!(f, "${{Token[Join:{}:{}]}}", delimiter, list)
            }
            Self::Split { delimiter, source } => {
                write!(f, "${{Token[Split:{}:{}]}}", delimiter, source)
            }
            Self::Dynamic(reference) => write!(f, "{}", reference),
        }
    }
}

/// A value known now or deferred until deployment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value<T> {
    Known(T),
    Deferred(Token),
}

impl<T> Value<T> {
    /// Whether the value is fully known at definition time.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// The known value, if any.
    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(v) => Some(v),
            Self::Deferred(_) => None,
        }
    }

    /// The token, if deferred.
    pub fn token(&self) -> Option<&Token> {
        match self {
            Self::Known(_) => None,
            Self::Deferred(t) => Some(t),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Value<U> {
        match self {
            Self::Known(v) => Value::Known(f(v)),
            Self::Deferred(t) => Value::Deferred(t),
        }
    }
}

impl Value<String> {
    pub fn to_json(&self) -> Json {
        match self {
            Self::Known(s) => Json::String(s.clone()),
            Self::Deferred(t) => t.to_json(),
        }
    }

    /// Known string, or the token's placeholder text.
    pub fn display(&self) -> String {
        match self {
            Self::Known(s) => s.clone(),
            Self::Deferred(t) => t.to_string(),
        }
    }

    fn into_fragment(self) -> Fragment {
        match self {
            Self::Known(s) => Fragment::Literal(s),
            Self::Deferred(t) => Fragment::Token(t),
        }
    }
}

impl Value<Vec<String>> {
    pub fn to_json(&self) -> Json {
        match self {
            Self::Known(items) => json!(items),
            Self::Deferred(t) => t.to_json(),
        }
    }
}

impl From<&str> for Value<String> {
    fn from(s: &str) -> Self {
        Self::Known(s.to_string())
    }
}

impl From<String> for Value<String> {
    fn from(s: String) -> Self {
        Self::Known(s)
    }
}

impl<T> From<Token> for Value<T> {
    fn from(t: Token) -> Self {
        Self::Deferred(t)
    }
}

/// Concatenate values. Collapses to a known string when every part is known.
pub fn join(parts: impl IntoIterator<Item = Value<String>>) -> Value<String> {
    let mut fragments: Vec<Fragment> = Vec::new();
    for part in parts {
        match part.into_fragment() {
            // Nested joins are flattened into one `Fn::Join`.
            Fragment::Token(Token::Join(inner)) => {
                for fragment in inner {
                    push_fragment(&mut fragments, fragment);
                }
            }
            fragment => push_fragment(&mut fragments, fragment),
        }
    }

    match fragments.as_slice() {
        [] => Value::Known(String::new()),
        [Fragment::Literal(s)] => Value::Known(s.clone()),
        [Fragment::Token(t)] => Value::Deferred(t.clone()),
        _ => Value::Deferred(Token::Join(fragments)),
    }
}

fn push_fragment(fragments: &mut Vec<Fragment>, fragment: Fragment) {
    match fragment {
        Fragment::Literal(s) if s.is_empty() => {}
        Fragment::Literal(s) => {
            if let Some(Fragment::Literal(prev)) = fragments.last_mut() {
                prev.push_str(&s);
            } else {
                fragments.push(Fragment::Literal(s));
            }
        }
        fragment => fragments.push(fragment),
    }
}

/// Join values with a delimiter.
pub fn join_with(delimiter: &str, items: &[Value<String>]) -> Value<String> {
    let mut parts = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            parts.push(Value::from(delimiter));
        }
        parts.push(item.clone());
    }
    join(parts)
}
