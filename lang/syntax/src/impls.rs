use crate::*;
use std::fmt;

macro_rules! impl_name {
    ($name:ident) => {
        impl $name {
            pub fn plain(&self) -> &str {
                let $name(name) = self;
                name
            }
        }
        impl<T: AsRef<str>> From<T> for $name {
            fn from(name: T) -> Self {
                $name(name.as_ref().to_string())
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.plain())
            }
        }
    };
}

impl_name!(VarName);

impl From<Arrow<ArcType>> for Type {
    fn from(arrow: Arrow<ArcType>) -> Self {
        Type::Arrow(arrow)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            | Type::Int => write!(f, "int"),
            | Type::Bool => write!(f, "bool"),
            | Type::Any => write!(f, "any"),
            | Type::Arrow(Arrow(dom, cod)) => match dom.as_ref() {
                | Type::Arrow(_) => write!(f, "({}) -> {}", dom, cod),
                | _ => write!(f, "{} -> {}", dom, cod),
            },
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            | BinOp::Add => "+",
            | BinOp::Sub => "-",
            | BinOp::Mul => "*",
            | BinOp::Div => "/",
            | BinOp::Mod => "mod",
            | BinOp::Lt => "<",
            | BinOp::Lte => "<=",
            | BinOp::Gt => ">",
            | BinOp::Gte => ">=",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arrows_print_right_associated() {
        let ty = Type::arrow(Type::Int, Type::arrow(Type::Bool, Type::Any));
        assert_eq!(ty.to_string(), "int -> bool -> any");
    }

    #[test]
    fn higher_order_domain_is_parenthesized() {
        let ty = Type::arrow(Type::arrow(Type::Int, Type::Int), Type::Int);
        assert_eq!(ty.to_string(), "(int -> int) -> int");
    }

    #[test]
    fn types_compare_structurally() {
        assert_eq!(Type::arrow(Type::Int, Type::Bool), Type::arrow(Type::Int, Type::Bool));
        assert_ne!(Type::arrow(Type::Any, Type::Int), Type::arrow(Type::Int, Type::Int));
    }

    #[test]
    fn operator_classes() {
        assert!(BinOp::Mod.is_arith());
        assert!(BinOp::Gte.is_cmp());
        assert_eq!(VarName::from("f'").plain(), "f'");
    }
}
