/// Longest id Slack hands out at the moment.
pub const ID_LENGTH: usize = 11;

/// Returned when a string cannot be used as one of the typed ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidId {
    kind: &'static str,
    input: String,
}

impl ::std::fmt::Display for InvalidId {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        write!(f, "{:?} is not a valid {}", self.input, self.kind)
    }
}

impl ::std::error::Error for InvalidId {}

macro_rules! make_id {
    ($name:ident, $($firstchar:expr),+) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            len: u8,
            buf: [u8; ID_LENGTH],
        }

        impl $name {
            #[inline]
            pub fn as_str(&self) -> &str {
                // Only ever filled from a &str, so this is always valid UTF-8
                ::std::str::from_utf8(&self.buf[..self.len as usize]).unwrap_or_default()
            }

            fn parse(input: &str) -> Option<Self> {
                if input.is_empty() || input.len() > ID_LENGTH {
                    return None;
                }
                match input.as_bytes().get(0) {
                    $(|Some($firstchar))* => {
                        let mut output = Self {
                            len: input.len() as u8,
                            buf: [0; ID_LENGTH],
                        };
                        output.buf[..input.len()].copy_from_slice(input.as_bytes());
                        Some(output)
                    }
                    _ => None,
                }
            }

            fn describe() -> String {
                format!(
                    "{} (a 1-{} byte string starting with one of {:?})",
                    stringify!($name),
                    ID_LENGTH,
                    [$($firstchar as char,)*],
                )
            }
        }

        impl<'a> ::std::convert::TryFrom<&'a str> for $name {
            type Error = InvalidId;

            #[inline]
            fn try_from(input: &'a str) -> Result<Self, InvalidId> {
                $name::parse(input).ok_or_else(|| InvalidId {
                    kind: stringify!($name),
                    input: input.to_string(),
                })
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = InvalidId;

            fn from_str(input: &str) -> Result<Self, InvalidId> {
                ::std::convert::TryFrom::try_from(input)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            #[inline]
            fn deserialize<D>(deserializer: D) -> Result<$name, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct IdVisitor;

                impl<'de> ::serde::de::Visitor<'de> for IdVisitor {
                    type Value = $name;

                    #[inline]
                    fn expecting(&self, formatter: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                        formatter.write_str(&$name::describe())
                    }

                    #[inline]
                    fn visit_str<E>(self, input: &str) -> Result<$name, E>
                    where
                        E: ::serde::de::Error,
                    {
                        $name::parse(input).ok_or_else(|| {
                            E::custom(format!("expected {}, found {:?}", $name::describe(), input))
                        })
                    }
                }

                deserializer.deserialize_str(IdVisitor)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", self)
            }
        }
    };
}

make_id!(BotId, b'B');
make_id!(UserId, b'U', b'W');
make_id!(AppId, b'A');
