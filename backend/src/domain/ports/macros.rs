//! `define_port_error!`: declares a port error enum with `thiserror` messages
//! and snake_case constructor functions for every variant.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SeatLedgerError {
            Unreachable { message: String } => "seat ledger unreachable: {message}",
            Stale { expected: u32, actual: u32 } => "stale ledger: expected {expected}, found {actual}",
            Closed => "seat ledger closed",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SeatLedgerError::unreachable("timeout");
        assert_eq!(err.to_string(), "seat ledger unreachable: timeout");
    }

    #[test]
    fn constructors_preserve_numeric_fields() {
        let err = SeatLedgerError::stale(2_u32, 3_u32);
        assert_eq!(err, SeatLedgerError::Stale { expected: 2, actual: 3 });
        assert_eq!(err.to_string(), "stale ledger: expected 2, found 3");
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(SeatLedgerError::closed(), SeatLedgerError::Closed);
    }
}
