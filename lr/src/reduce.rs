use crate::{Tables, State, ProdId, ReductionError};

/// Pops the right-hand side of `prod` off `stack` and returns the state to go
/// to from the exposed state. The caller pushes it.
///
/// Only the number of popped states matters; the symbols they stand for are
/// implied by the automaton. On error the stack is left as it was, except
/// for [`ReductionError::MissingGoto`], which is reported after popping.
pub fn reduce(
  tables: &Tables,
  stack: &mut Vec<State>,
  prod: ProdId,
) -> Result<State, ReductionError> {
  let production = tables.production(prod)
    .ok_or(ReductionError::UnknownProduction { prod })?;
  let rhs_len = production.rhs_len();

  // the bottom state must survive the pop
  if stack.len() <= rhs_len {
    return Err(ReductionError::StackUnderflow {
      prod,
      rhs_len,
      depth: stack.len(),
    });
  }

  stack.truncate(stack.len() - rhs_len);
  let exposed_state = stack[stack.len() - 1];

  tables.goto(exposed_state, production.lhs())
    .ok_or_else(|| ReductionError::MissingGoto {
      exposed_state,
      non_terminal: production.lhs().to_owned(),
    })
}
