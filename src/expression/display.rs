use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mul(_, _) | Expression::Div(_, _) => 2,
                Expression::Neg(_) => 3,
                Expression::Pow(_, _) => 4,
                Expression::Number(_) => 5,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn write_binary(
            f: &mut fmt::Formatter,
            l: &Expression,
            need_l: bool,
            symbol: &str,
            r: &Expression,
            need_r: bool,
        ) -> fmt::Result {
            write_with_parens(f, l, need_l)?;
            write!(f, " {} ", symbol)?;
            write_with_parens(f, r, need_r)
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r) => write_binary(f, l, false, "+", r, false),
                Expression::Sub(l, r) => {
                    let need_r = precedence(r) <= 1;
                    write_binary(f, l, false, "-", r, need_r)
                }
                Expression::Mul(l, r) => {
                    let need_l = precedence(l) < 2;
                    let need_r = precedence(r) < 2;
                    write_binary(f, l, need_l, "*", r, need_r)
                }
                Expression::Div(l, r) => {
                    let need_l = precedence(l) < 2;
                    let need_r = precedence(r) <= 2;
                    write_binary(f, l, need_l, "/", r, need_r)
                }
                Expression::Pow(l, r) => {
                    // Right-associative: a left-hand power or any signed base needs parens.
                    let negative_literal = matches!(l.as_ref(), Expression::Number(n) if *n < 0.0);
                    let need_l = precedence(l) <= 4 || negative_literal;
                    let need_r = precedence(r) < 4;
                    write_binary(f, l, need_l, "^", r, need_r)
                }
                Expression::Neg(e) => {
                    let need = precedence(e) < 3;
                    write!(f, "-")?;
                    write_with_parens(f, e, need)
                }
            }
        }

        fmt_expression(f, self)
    }
}
