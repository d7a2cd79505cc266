use crate::{LogicProgram, ResourceLimits};

pub(crate) const REPRESSILATOR: &str = r#"
VAR p 0 1
VAR q 0 1
VAR r 0 1

p(0,T) :- q(1,T-1).
p(1,T) :- q(0,T-1).
q(0,T) :- r(1,T-1).
q(1,T) :- r(0,T-1).
r(0,T) :- p(1,T-1).
r(1,T) :- p(0,T-1).
"#;

pub(crate) fn repressilator() -> LogicProgram {
    crate::parse_program(REPRESSILATOR, None, &ResourceLimits::default()).unwrap()
}

mod simulation;



mod serializers;
