//! Print Term Module
//!
//! `Display` for [`Term`] in Erlang syntax, the way the shell would print it.
//! Based on lib/erl_interface/src/misc/ei_printterm.c
//!
//! Identifiers have no literal syntax; they print in the `#Pid<...>` style used
//! by the shell for values from other nodes.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * This file is derived from work copyrighted by Ericsson AB 1996-2025.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use crate::term::Term;
use std::fmt::{self, Display, Formatter, Write};

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(atom) => write!(f, "{}", atom),
            Term::Integer(value) => write!(f, "{}", value),
            Term::Float(value) => write_float(f, *value),
            Term::Binary(bytes) => write_binary(f, bytes, None),
            Term::BitBinary { data, bits } => write_binary(f, data, Some(*bits)),
            Term::String(bytes) => write_string(f, bytes),
            Term::List(elements) => {
                f.write_char('[')?;
                write_sequence(f, elements)?;
                f.write_char(']')
            }
            Term::ImproperList { elements, tail } => {
                f.write_char('[')?;
                write_sequence(f, elements)?;
                write!(f, "|{}]", tail)
            }
            Term::Tuple(tuple) => {
                f.write_char('{')?;
                write_sequence(f, tuple.elements())?;
                f.write_char('}')
            }
            Term::Map(map) => {
                f.write_str("#{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{} => {}", key, value)?;
                }
                f.write_char('}')
            }
            Term::Pid(pid) => write!(f, "#Pid<{}.{}.{}>", pid.node, pid.id, pid.serial),
            Term::Port(port) => write!(f, "#Port<{}.{}>", port.node, port.id),
            Term::Reference(reference) => {
                write!(f, "#Ref<{}", reference.node)?;
                for id in reference.ids.iter().rev() {
                    write!(f, ".{}", id)?;
                }
                f.write_char('>')
            }
            Term::Export(export) => {
                write!(f, "fun {}:{}/{}", export.module, export.function, export.arity)
            }
            Term::Fun(fun) => write!(f, "#Fun<{}.{}.{}>", fun.module, fun.old_index, fun.old_uniq),
            Term::OldFun(fun) => write!(f, "#Fun<{}.{}.{}>", fun.module, fun.index, fun.uniq),
        }
    }
}

fn write_sequence(f: &mut Formatter<'_>, elements: &[Term]) -> fmt::Result {
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{}", element)?;
    }
    Ok(())
}

fn write_float(f: &mut Formatter<'_>, value: f64) -> fmt::Result {
    // Erlang floats always print with a fractional part
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        write!(f, "{:.1}", value)
    } else {
        write!(f, "{:?}", value)
    }
}

fn write_binary(f: &mut Formatter<'_>, bytes: &[u8], last_bits: Option<u8>) -> fmt::Result {
    f.write_str("<<")?;
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        let is_last = i + 1 == bytes.len();
        match last_bits {
            Some(bits) if is_last && (1..8).contains(&bits) => {
                write!(f, "{}:{}", byte >> (8 - bits), bits)?
            }
            _ => write!(f, "{}", byte)?,
        }
    }
    f.write_str(">>")
}

fn write_string(f: &mut Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    let printable = bytes
        .iter()
        .all(|&b| (0x20..0x7F).contains(&b) || b == b'\n' || b == b'\t');
    if !printable {
        // Not printable text: show the integer list it really is
        f.write_char('[')?;
        for (i, byte) in bytes.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{}", byte)?;
        }
        return f.write_char(']');
    }
    f.write_char('"')?;
    for &byte in bytes {
        match byte {
            b'"' => f.write_str("\\\"")?,
            b'\\' => f.write_str("\\\\")?,
            b'\n' => f.write_str("\\n")?,
            b'\t' => f.write_str("\\t")?,
            _ => f.write_char(char::from(byte))?,
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use crate::{Atom, Map, OldFun, Pid, Term};

    #[test]
    fn test_print_scalars() {
        assert_eq!(Term::atom("ok").to_string(), "ok");
        assert_eq!(Term::from(-5).to_string(), "-5");
        assert_eq!(Term::from(2.0).to_string(), "2.0");
        assert_eq!(Term::from(0.25).to_string(), "0.25");
        assert_eq!(Term::binary(vec![1, 2, 3]).to_string(), "<<1,2,3>>");
        let bits = Term::BitBinary { data: vec![0xFF, 0b1010_0000], bits: 3 };
        assert_eq!(bits.to_string(), "<<255,5:3>>");
    }

    #[test]
    fn test_print_strings() {
        assert_eq!(Term::from("say \"hi\"").to_string(), "\"say \\\"hi\\\"\"");
        assert_eq!(Term::String(vec![1, 2]).to_string(), "[1,2]");
    }

    #[test]
    fn test_print_containers() {
        let message = Term::tuple(vec![
            Term::atom("register_with_group"),
            Term::atom("time_server"),
        ]);
        assert_eq!(message.to_string(), "{register_with_group,time_server}");
        assert_eq!(Term::nil().to_string(), "[]");
        let improper = Term::ImproperList {
            elements: vec![Term::from(1)],
            tail: Box::new(Term::atom("t")),
        };
        assert_eq!(improper.to_string(), "[1|t]");
        let map = Map::from_pairs(vec![(Term::atom("k"), Term::from(1))]);
        assert_eq!(Term::Map(map).to_string(), "#{k => 1}");
    }

    #[test]
    fn test_print_pid() {
        let pid = Pid { node: Atom::new("gw@host"), id: 80, serial: 0, creation: 1 };
        assert_eq!(Term::Pid(pid.clone()).to_string(), "#Pid<gw@host.80.0>");

        let fun = OldFun { pid, module: Atom::new("m"), index: 4, uniq: 99, free_vars: vec![] };
        assert_eq!(Term::OldFun(Box::new(fun)).to_string(), "#Fun<m.4.99>");
    }
}
