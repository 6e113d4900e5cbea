/// Parser for vector and matrix literals given on the command line
///
/// Vectors are written `1, 1`, `1 1` or `[1, 1]`. Matrices are written as
/// nested lists `[[2, 1], [-1, 1]]` or as rows separated by semicolons
/// `2 1; -1 1`.
use nalgebra::{Vector2, Vector3};
use nom::{
    branch::alt,
    character::complete::{char, multispace0},
    combinator::{all_consuming, opt},
    multi::{many1, separated_list1},
    number::complete::double,
    sequence::{delimited, terminated},
    Finish, IResult,
};

use crate::error::{Error, Result};
use crate::transform::LinearMap2;

/// Parse a flat list of numbers
pub fn parse_vector(input: &str) -> Result<Vec<f64>> {
    let values = run(vector, input)?;
    check_finite(&values)?;
    Ok(values)
}

/// Parse a rectangular matrix as a list of rows
pub fn parse_matrix(input: &str) -> Result<Vec<Vec<f64>>> {
    let rows = run(matrix, input)?;

    let expected = rows[0].len();
    for (row, values) in rows.iter().enumerate() {
        if values.len() != expected {
            return Err(Error::RaggedMatrix {
                row,
                expected,
                found: values.len(),
            });
        }
        check_finite(values)?;
    }

    Ok(rows)
}

pub fn parse_vector2(input: &str) -> Result<Vector2<f64>> {
    match parse_vector(input)?.as_slice() {
        &[x, y] => Ok(Vector2::new(x, y)),
        other => Err(Error::Dimension {
            expected: (2, 1),
            found: (other.len(), 1),
        }),
    }
}

pub fn parse_vector3(input: &str) -> Result<Vector3<f64>> {
    match parse_vector(input)?.as_slice() {
        &[x, y, z] => Ok(Vector3::new(x, y, z)),
        other => Err(Error::Dimension {
            expected: (3, 1),
            found: (other.len(), 1),
        }),
    }
}

pub fn parse_matrix2(input: &str) -> Result<LinearMap2> {
    LinearMap2::from_rows(&parse_matrix(input)?)
}

fn run<'a, O>(parser: impl FnMut(&'a str) -> IResult<&'a str, O>, input: &'a str) -> Result<O> {
    all_consuming(parser)(input)
        .finish()
        .map(|(_, out)| out)
        .map_err(|e| {
            if e.input.is_empty() {
                Error::Parse(format!("unexpected end of input in {input:?}"))
            } else {
                Error::Parse(format!("unexpected {:?} in {input:?}", e.input))
            }
        })
}

fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(Error::Parse(format!("{v} is not a finite number"))),
        None => Ok(()),
    }
}

fn number(input: &str) -> IResult<&str, f64> {
    delimited(multispace0, double, multispace0)(input)
}

fn numbers(input: &str) -> IResult<&str, Vec<f64>> {
    many1(terminated(number, opt(char(','))))(input)
}

fn bracketed<'a, O>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(
        delimited(multispace0, char('['), multispace0),
        inner,
        delimited(multispace0, char(']'), multispace0),
    )
}

fn vector(input: &str) -> IResult<&str, Vec<f64>> {
    alt((bracketed(numbers), numbers))(input)
}

fn matrix(input: &str) -> IResult<&str, Vec<Vec<f64>>> {
    alt((
        bracketed(many1(terminated(bracketed(numbers), opt(char(','))))),
        separated_list1(char(';'), numbers),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector_forms() {
        assert_eq!(parse_vector("1, 1").unwrap(), vec![1.0, 1.0]);
        assert_eq!(parse_vector("1 1").unwrap(), vec![1.0, 1.0]);
        assert_eq!(parse_vector(" [ -2.5, 3e1 ] ").unwrap(), vec![-2.5, 30.0]);
    }

    #[test]
    fn test_parse_matrix_forms() {
        let expected = vec![vec![2.0, 1.0], vec![-1.0, 1.0]];
        assert_eq!(parse_matrix("[[2, 1], [-1, 1]]").unwrap(), expected);
        assert_eq!(parse_matrix("2 1; -1 1").unwrap(), expected);
        assert_eq!(parse_matrix("2,1;-1,1").unwrap(), expected);
    }

    #[test]
    fn test_parse_matrix2() {
        assert_eq!(parse_matrix2("[[2, 1], [-1, 1]]").unwrap(), LinearMap2::demo());
    }

    #[test]
    fn test_ragged_matrix() {
        assert_eq!(
            parse_matrix("1 2; 3"),
            Err(Error::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_wrong_dimension() {
        assert_eq!(
            parse_vector2("1, 2, 3"),
            Err(Error::Dimension {
                expected: (2, 1),
                found: (3, 1)
            })
        );
        assert!(matches!(
            parse_matrix2("1 2 3; 4 5 6"),
            Err(Error::Dimension { .. })
        ));
        assert_eq!(parse_vector3("1 2 3").unwrap(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_garbage() {
        assert!(matches!(parse_vector("1, x"), Err(Error::Parse(_))));
        assert!(matches!(parse_vector(""), Err(Error::Parse(_))));
        assert!(matches!(parse_matrix("[[1, 2], [3, 4]"), Err(Error::Parse(_))));
    }
}
