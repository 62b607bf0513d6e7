//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

/// Geographic extent
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    /// Extent of a single point
    pub fn from_point(x: f64, y: f64) -> Extent {
        Extent {
            minx: x,
            miny: y,
            maxx: x,
            maxy: y,
        }
    }
    /// Axis aligned box centered on (x, y)
    pub fn centered(x: f64, y: f64, width: f64, height: f64) -> Extent {
        Extent {
            minx: x - width * 0.5,
            miny: y - height * 0.5,
            maxx: x + width * 0.5,
            maxy: y + height * 0.5,
        }
    }
    /// Grow extent to include (x, y)
    pub fn expand(&mut self, x: f64, y: f64) {
        self.minx = self.minx.min(x);
        self.miny = self.miny.min(y);
        self.maxx = self.maxx.max(x);
        self.maxy = self.maxy.max(y);
    }
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
    /// Inclusive containment test
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.minx && x <= self.maxx && y >= self.miny && y <= self.maxy
    }
    /// Closed counter-clockwise exterior ring
    pub fn ring(&self) -> [(f64, f64); 5] {
        [
            (self.minx, self.miny),
            (self.maxx, self.miny),
            (self.maxx, self.maxy),
            (self.minx, self.maxy),
            (self.minx, self.miny),
        ]
    }
}
