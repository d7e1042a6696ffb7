/*
 * Copyright (c) 2023 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Reading and writing landmark tables in a binary format.
//!
//! All numbers are little endian. The format is
//!
//! ```text
//! directed:  u8 (0 or 1)
//! landmarks: i32 count, followed by the landmark nodes
//! from:      i32 count, followed by (node, f64 x #landmarks) entries
//! to:        same as `from`, only present if directed
//! ```
//!
//! The encoding of nodes is given by the caller.

use super::{Alt, AltError, AltState, Distances, MAX_LANDMARKS};

use crate::num::traits::{cast, Float};

use log::debug;

use std::collections::HashMap;
use std::convert::TryFrom;
use std::hash::Hash;
use std::io::{self, Read, Write};

fn write_count<W: Write>(w: &mut W, n: usize) -> Result<(), AltError> {
    let n = i32::try_from(n).map_err(|_| AltError::Format(format!("count {} too large", n)))?;
    w.write_all(&n.to_le_bytes())?;
    Ok(())
}

fn read_count<R: Read>(r: &mut R) -> Result<usize, AltError> {
    let mut buf = [0; 4];
    r.read_exact(&mut buf)?;
    let n = i32::from_le_bytes(buf);
    usize::try_from(n).map_err(|_| AltError::Format(format!("negative count {}", n)))
}

fn write_table<N, D, W, F>(
    w: &mut W,
    table: &HashMap<N, Distances<D>>,
    write_node: &mut F,
) -> Result<(), AltError>
where
    N: Copy,
    D: Float,
    W: Write,
    F: FnMut(&mut W, N) -> io::Result<()>,
{
    write_count(w, table.len())?;
    for (&u, dists) in table {
        write_node(w, u)?;
        for d in dists {
            let d = d
                .to_f64()
                .ok_or_else(|| AltError::Format("distance not representable as f64".to_string()))?;
            w.write_all(&d.to_le_bytes())?;
        }
    }
    Ok(())
}

fn read_table<N, D, R, F>(r: &mut R, n: usize, read_node: &mut F) -> Result<HashMap<N, Distances<D>>, AltError>
where
    N: Copy + Eq + Hash,
    D: Float,
    R: Read,
    F: FnMut(&mut R) -> io::Result<N>,
{
    let count = read_count(r)?;
    // the count is not trusted, the table grows with the entries actually read
    let mut table = HashMap::new();
    let mut buf = [0; 8];
    for _ in 0..count {
        let u = read_node(r)?;
        let mut dists = Distances::with_capacity(n);
        for _ in 0..n {
            r.read_exact(&mut buf)?;
            let d = cast::<f64, D>(f64::from_le_bytes(buf))
                .ok_or_else(|| AltError::Format("invalid distance".to_string()))?;
            dists.push(d);
        }
        if table.insert(u, dists).is_some() {
            return Err(AltError::Format("duplicate node in distance table".to_string()));
        }
    }
    Ok(table)
}

impl<N, D> Alt<N, D>
where
    N: Copy + Eq + Hash,
    D: Float,
{
    /// Write the landmark tables to `w`.
    ///
    /// Each node is written by `write_node`.
    ///
    /// # Example
    ///
    /// ```
    /// use rs_path::alt::Alt;
    /// use rs_path::classes;
    /// use std::io::{Cursor, Read, Write};
    ///
    /// let g = classes::path::<f64>(4);
    /// let mut alt = Alt::new(false);
    /// alt.compute(&g, &[0, 4]).unwrap();
    ///
    /// let mut data = vec![];
    /// alt.write_to(&mut data, |w, u| w.write_all(&(u as u32).to_le_bytes())).unwrap();
    ///
    /// let restored = Alt::<usize, f64>::read_from(&mut Cursor::new(data), |r| {
    ///     let mut buf = [0; 4];
    ///     r.read_exact(&mut buf)?;
    ///     Ok(u32::from_le_bytes(buf) as usize)
    /// })
    /// .unwrap();
    /// assert_eq!(restored.landmarks(), &[0, 4]);
    /// assert_eq!(restored.from_landmarks(1), Some(&[1.0, 3.0][..]));
    /// ```
    pub fn write_to<W, F>(&self, w: &mut W, mut write_node: F) -> Result<(), AltError>
    where
        W: Write,
        F: FnMut(&mut W, N) -> io::Result<()>,
    {
        w.write_all(&[u8::from(self.directed)])?;
        write_count(w, self.landmarks.len())?;
        for &l in &self.landmarks {
            write_node(w, l)?;
        }
        write_table(w, &self.from_landmarks, &mut write_node)?;
        if self.directed {
            write_table(w, &self.to_landmarks, &mut write_node)?;
        }
        Ok(())
    }

    /// Read landmark tables written by [`Alt::write_to`].
    ///
    /// Each node is read by `read_node`. The returned object is ready for
    /// use.
    pub fn read_from<R, F>(r: &mut R, mut read_node: F) -> Result<Self, AltError>
    where
        R: Read,
        F: FnMut(&mut R) -> io::Result<N>,
    {
        let mut flag = [0; 1];
        r.read_exact(&mut flag)?;
        let directed = match flag[0] {
            0 => false,
            1 => true,
            x => return Err(AltError::Format(format!("invalid directed flag {}", x))),
        };

        let n = read_count(r)?;
        if n > MAX_LANDMARKS {
            return Err(AltError::TooManyLandmarks {
                requested: n,
                max: MAX_LANDMARKS,
            });
        }
        let landmarks = (0..n).map(|_| read_node(r)).collect::<io::Result<Vec<_>>>()?;

        let from_landmarks = read_table(r, n, &mut read_node)?;
        let to_landmarks = if directed {
            read_table(r, n, &mut read_node)?
        } else {
            HashMap::new()
        };

        debug!(
            "Read {} landmarks with {} + {} table entries",
            n,
            from_landmarks.len(),
            to_landmarks.len()
        );

        Ok(Alt {
            directed,
            state: AltState::Ready,
            landmarks,
            from_landmarks,
            to_landmarks,
        })
    }
}
