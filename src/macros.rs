/// Implement [`Schema`][`crate::schema::Schema`] and
/// [`Bind`][`crate::schema::Bind`] for a struct.
///
/// Each listed field binds to the tag with the same name, ignoring case. A
/// string after the field gives a different tag name, which is needed for
/// tag names that are not valid Rust identifiers or not in snake case:
///
/// ```rust
/// use nbtbind::schema;
///
/// #[derive(Default)]
/// struct ListTest {
///     created_on: i64,
///     name: String,
/// }
///
/// schema!(ListTest {
///     created_on: "created-on",
///     name,
/// });
/// ```
///
/// The struct's own name is what a named root tag has to match to bind to
/// the struct. Use `as` to match a different root name:
///
/// ```rust
/// # use nbtbind::schema;
/// #[derive(Default)]
/// struct Player {
///     health: f32,
/// }
///
/// schema!(Player as "PlayerData" { health: "Health" });
/// ```
///
/// Fields left out of the list are never written by the decoder. Every
/// listed field's type must implement [`Bind`][`crate::schema::Bind`].
#[macro_export]
macro_rules! schema {
    ($ty:ident $(as $root:literal)? { $($field:ident $(: $alias:literal)?),* $(,)? }) => {
        impl $crate::schema::Schema for $ty {
            fn type_name(&self) -> &'static str {
                $crate::schema_internal!(@name ::std::stringify!($ty) $(, $root)?)
            }

            #[allow(unused_variables)]
            fn bind_fields<'a>(&'a mut self, fields: &mut $crate::schema::Fields<'a>) {
                $(
                    fields.field(
                        $crate::schema_internal!(@name ::std::stringify!($field) $(, $alias)?),
                        &mut self.$field,
                    );
                )*
            }
        }

        impl $crate::schema::Bind for $ty {
            fn bind(&mut self) -> $crate::schema::Binding<'_> {
                $crate::schema::Binding::Nested(self)
            }
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! schema_internal {
    // No alias given, use the identifier.
    (@name $default:expr) => {
        $default
    };

    (@name $default:expr, $alias:expr) => {
        $alias
    };
}
