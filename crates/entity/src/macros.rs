//! Typed entities
//!
//! [`validated_entity!`](crate::validated_entity) declares a struct whose
//! attribute set is fixed at compile time. Each attribute gets a getter and
//! a named setter that route through the same validated accessors as
//! [`Entity`](crate::Entity).
//!
//! ```
//! use typekind_entity::{validated_entity, Value};
//!
//! validated_entity! {
//!     /// A login
//!     pub struct User {
//!         username: String => set_username,
//!         password: String => set_password,
//!     }
//! }
//!
//! let mut user = User::new()?;
//! user.set_username("Igor")?;
//! assert_eq!(user.username()?, &Value::from("Igor"));
//! assert!(user.set_password(42).is_err());
//! # Ok::<(), typekind_entity::Error>(())
//! ```

/// Declare a struct with validated, kind-checked attributes
///
/// Kinds are written as `Kind` variant names: `Object`, `String`, `Array`,
/// `RegExp`, `Number`, `Boolean`, `Function`, `Date`. Declaring `Undefined`
/// or `Null` makes `new()` fail.
#[macro_export]
macro_rules! validated_entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $kind:ident => $setter:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            entity: $crate::Entity,
        }

        impl $name {
            /// Create an instance with every attribute unset
            $vis fn new() -> $crate::Result<Self> {
                let schema = $crate::Schema::builder()
                    $(.attribute(stringify!($field), $crate::Kind::$kind))*
                    .build()?;
                Ok(Self {
                    entity: $crate::Entity::new(schema),
                })
            }

            $(
                $(#[$field_meta])*
                $vis fn $field(&self) -> $crate::Result<&$crate::Value> {
                    self.entity.get(stringify!($field))
                }

                #[doc = concat!("Assign `", stringify!($field), "`, checking its kind")]
                $vis fn $setter(
                    &mut self,
                    value: impl Into<$crate::Value>,
                ) -> $crate::Result<()> {
                    self.entity.set(stringify!($field), value)
                }
            )*

            /// Clear all attribute values
            $vis fn destroy(&mut self) {
                self.entity.destroy();
            }

            /// Whether [`destroy`](Self::destroy) has been called
            $vis fn is_destroyed(&self) -> bool {
                self.entity.is_destroyed()
            }

            /// The underlying validated entity
            $vis fn entity(&self) -> &$crate::Entity {
                &self.entity
            }
        }
    };
}
