/// Final dot-separated segment of a fully-qualified identifier.
///
/// `"qiskit.circuit.QuantumCircuit"` yields `"QuantumCircuit"`; a name without
/// a dot is returned unchanged.
pub fn last_part_from_full_identifier(full_identifier: &str) -> &str {
    full_identifier
        .rsplit('.')
        .next()
        .unwrap_or(full_identifier)
}
