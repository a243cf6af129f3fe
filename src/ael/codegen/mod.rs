use std::collections::HashSet;

use super::ast::{Expression, Name, Program, Statement};

const INDENT: &str = "    ";
/// Emitted identifiers get this prefix so no generated name can collide
/// with a JavaScript reserved word.
const NAME_PREFIX: &str = "_";
/// Statement-level precedence floor; nothing wraps at the top of a
/// statement.
const TOP: u8 = 0;

/// Renders `program` as equivalent JavaScript, one statement per line,
/// loop bodies indented one level per block depth.
pub fn generate(program: &Program) -> String {
    let mut generator = Generator::new();
    for statement in &program.statements {
        generator.statement(statement, 0);
    }
    generator.lines.join("\n")
}

/// Renders one expression. `threshold` is the minimum precedence the
/// surrounding context accepts without parentheses; a node below it wraps
/// itself. Leaves never wrap.
pub fn expression(expr: &Expression, threshold: u8) -> String {
    match expr {
        Expression::Literal(value) => format!("{}", value),
        Expression::Identifier(name) => mangle(name),
        Expression::Unary(operator, operand) => {
            let rendered = format!(
                "{}{}",
                operator.symbol(),
                expression(operand, operator.precedence() + 1)
            );
            parenthesize(rendered, operator.precedence(), threshold)
        }
        Expression::Binary(operator, left, right) => {
            let precedence = operator.precedence();
            // The associating side accepts equal precedence bare; the
            // other side must wrap to keep its evaluation order.
            let (left_floor, right_floor) = if operator.right_associative() {
                (precedence + 1, precedence)
            } else {
                (precedence, precedence + 1)
            };
            let rendered = format!(
                "{} {} {}",
                expression(left, left_floor),
                operator.symbol(),
                expression(right, right_floor)
            );
            parenthesize(rendered, precedence, threshold)
        }
    }
}

fn parenthesize(rendered: String, precedence: u8, threshold: u8) -> String {
    if precedence >= threshold {
        rendered
    } else {
        format!("({})", rendered)
    }
}

fn mangle(name: &Name) -> String {
    format!("{}{}", NAME_PREFIX, name)
}

struct Generator {
    declared: HashSet<Name>,
    lines: Vec<String>,
}

impl Generator {
    fn new() -> Generator {
        Generator {
            declared: HashSet::new(),
            lines: Vec::new(),
        }
    }

    fn statement(&mut self, statement: &Statement, depth: usize) {
        let indent = INDENT.repeat(depth);
        match statement {
            Statement::Assignment(name, value) => {
                // Declare each name once, at its first assignment in
                // program order.
                let keyword = if self.declared.insert(name.clone()) {
                    "var "
                } else {
                    ""
                };
                self.lines.push(format!(
                    "{}{}{} = {};",
                    indent,
                    keyword,
                    mangle(name),
                    expression(value, TOP)
                ));
            }
            Statement::Print(value) => {
                self.lines
                    .push(format!("{}console.log({});", indent, expression(value, TOP)));
            }
            Statement::While(condition, body) => {
                self.lines.push(format!(
                    "{}while ({} > 0) {{",
                    indent,
                    expression(condition, TOP)
                ));
                for inner in body {
                    self.statement(inner, depth + 1);
                }
                self.lines.push(format!("{}}}", indent));
            }
        }
    }
}
