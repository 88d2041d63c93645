use std::collections::HashMap;

use lazy_static::lazy_static;

/// Binding strength of the binary operators. Larger binds tighter.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Relational = 10,
    Additive = 20,
    Multiplicative = 40,
}

lazy_static! {
    pub static ref BINOP_PRECEDENCE: HashMap<&'static str, BindingPower> = {
        let mut map = HashMap::new();

        // Relational
        map.insert("<", BindingPower::Relational);
        map.insert("<=", BindingPower::Relational);
        map.insert(">", BindingPower::Relational);
        map.insert(">=", BindingPower::Relational);
        map.insert("==", BindingPower::Relational);
        map.insert("!=", BindingPower::Relational);

        // Additive and multiplicative
        map.insert("+", BindingPower::Additive);
        map.insert("-", BindingPower::Additive);
        map.insert("*", BindingPower::Multiplicative);
        map.insert("/", BindingPower::Multiplicative);
        map.insert("%", BindingPower::Multiplicative);
        map
    };
}

/// Precedence used by the expression parser for an operator token's text,
/// or -1 when the text is not a binary operator.
pub fn binop_precedence(operator: &str) -> i32 {
    BINOP_PRECEDENCE
        .get(operator)
        .map(|binding_power| *binding_power as i32)
        .unwrap_or(-1)
}
