// Lectura de archivos .dom (certificados de dominós, ver math.uwaterloo.ca/~bico/qss).
//
// Formato:
//   línea 1:     <ignorado> <cantidad_de_dominos>
//   líneas 2..:  <surplus> <Asize> <Bsize> <t_1> ... <t_{Asize+Bsize}>
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{check_unit_bound, DomError};
use crate::models::{Domino, Vertex};

/// Lee un archivo .dom y devuelve los dominós aceptados (surplus <= surplus_bound)
/// en el orden del archivo.
///
/// La lectura se detiene en cuanto se aceptan `node_cap` dominós, aunque queden
/// registros sin leer: registros posteriores con menor surplus nunca se consideran.
pub fn parse_dom_file<P: AsRef<Path>>(
    path: P,
    surplus_bound: f64,
    node_cap: usize,
) -> Result<Vec<Domino>, DomError> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|source| DomError::Io { path: path.to_path_buf(), source })?;
    parse_dom_reader(BufReader::new(file), surplus_bound, node_cap)
}

/// Igual que `parse_dom_file` pero sobre cualquier `BufRead`.
pub fn parse_dom_reader<R: BufRead>(
    reader: R,
    surplus_bound: f64,
    node_cap: usize,
) -> Result<Vec<Domino>, DomError> {
    check_unit_bound("surplus_bound", surplus_bound)?;
    if node_cap == 0 {
        return Err(DomError::InvalidArgument("node_cap must be at least 1".to_string()));
    }

    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(Ok(l)) => l,
        Some(Err(source)) => return Err(DomError::Read { line: 1, source }),
        None => return Err(DomError::MissingHeader),
    };
    let declared = parse_header(&header)?;

    let mut accepted: Vec<Domino> = Vec::new();
    for file_index in 0..declared {
        let line_no = file_index + 2;
        let line = match lines.next() {
            Some(Ok(l)) => l,
            Some(Err(source)) => return Err(DomError::Read { line: line_no, source }),
            None => return Err(DomError::Truncated { expected: declared, found: file_index }),
        };

        let domino = parse_record(&line, file_index, line_no)?;
        if domino.surplus > surplus_bound {
            continue;
        }
        if domino.teeth_overlap() {
            warn!("[domfile] line {}: teeth A and B overlap", line_no);
        }
        accepted.push(domino);

        if accepted.len() == node_cap {
            debug!(
                "[domfile] node cap {} reached at record {} of {}",
                node_cap, file_index, declared
            );
            break;
        }
    }

    Ok(accepted)
}

fn parse_header(line: &str) -> Result<usize, DomError> {
    let tok = line.split_whitespace().nth(1).ok_or_else(|| {
        DomError::InvalidHeader(format!("expected 2 tokens, got '{}'", line.trim()))
    })?;
    tok.parse::<usize>().map_err(|_| {
        DomError::InvalidHeader(format!("domino count '{}' is not a non-negative integer", tok))
    })
}

fn parse_record(line: &str, file_index: usize, line_no: usize) -> Result<Domino, DomError> {
    let malformed = |reason: String| DomError::MalformedRecord { line: line_no, reason };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(malformed(format!("expected at least 3 tokens, got {}", tokens.len())));
    }

    let surplus = tokens[0]
        .parse::<f64>()
        .map_err(|_| malformed(format!("surplus '{}' is not a number", tokens[0])))?;
    if !surplus.is_finite() || surplus < 0.0 {
        return Err(malformed(format!(
            "surplus '{}' is not a finite non-negative number",
            tokens[0]
        )));
    }
    let a_size = tokens[1]
        .parse::<usize>()
        .map_err(|_| malformed(format!("Asize '{}' is not a non-negative integer", tokens[1])))?;
    let b_size = tokens[2]
        .parse::<usize>()
        .map_err(|_| malformed(format!("Bsize '{}' is not a non-negative integer", tokens[2])))?;

    let teeth = &tokens[3..];
    let expected = a_size
        .checked_add(b_size)
        .ok_or_else(|| malformed(format!("Asize {} + Bsize {} overflows", a_size, b_size)))?;
    if teeth.len() != expected {
        return Err(malformed(format!(
            "expected {} teeth (Asize {} + Bsize {}), got {}",
            expected,
            a_size,
            b_size,
            teeth.len()
        )));
    }

    let mut parsed: Vec<Vertex> = Vec::with_capacity(teeth.len());
    for t in teeth {
        let v = t
            .parse::<Vertex>()
            .map_err(|_| malformed(format!("tooth '{}' is not an integer", t)))?;
        parsed.push(v);
    }
    let teeth_b = parsed.split_off(a_size);

    Ok(Domino::new(file_index, surplus, parsed, teeth_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record_splits_teeth() {
        let d = parse_record("0.0006 1 2 529 527 528", 0, 2).unwrap();
        assert_eq!(d.surplus, 0.0006);
        assert_eq!(d.teeth_a, [529].into_iter().collect());
        assert_eq!(d.teeth_b, [527, 528].into_iter().collect());
        assert_eq!(d.vertices, [529, 527, 528].into_iter().collect());
    }

    #[test]
    fn parse_record_rejects_wrong_token_count() {
        let err = parse_record("0.1 2 1 4 5", 3, 5).unwrap_err();
        assert!(matches!(err, DomError::MalformedRecord { line: 5, .. }));
    }

    #[test]
    fn header_needs_second_token() {
        assert_eq!(parse_header("pr76 66").unwrap(), 66);
        assert!(parse_header("66").is_err());
        assert!(parse_header("pr76 x").is_err());
    }
}
