//! Plan geometry of an optimized bay
//!
//! Coordinates are in feet with the origin at the bay's lower-left corner,
//! `x` along the width and `y` along the height. Girders always run along
//! the long sides and beams span the short direction.

use serde::{Deserialize, Serialize};

use super::{FrameDesign, FrameInput, MemberRole};

/// One member drawn as a straight line in plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberLine {
    pub role: MemberRole,
    pub section_id: String,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

impl MemberLine {
    /// Length of the line (ft)
    pub fn length_ft(&self) -> f64 {
        let dx = self.end.0 - self.start.0;
        let dy = self.end.1 - self.start.1;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Member lines and interior beam positions for a designed bay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BayLayout {
    pub width_ft: f64,
    pub height_ft: f64,

    /// Girders, side beams, then interior beams in order along the long side
    pub members: Vec<MemberLine>,

    /// Interior beam offsets along the long side (ft, 2 decimals)
    pub interior_ticks_ft: Vec<f64>,
}

impl BayLayout {
    /// Lay out the members of `design` on the bay described by `input`.
    pub fn from_design(input: &FrameInput, design: &FrameDesign) -> Self {
        let width = input.width_ft;
        let height = input.height_ft;
        let config = &design.configuration;
        let n = config.beam_count;

        // Height is the long side on a square bay, matching FrameInput::spans
        let long_is_height = height >= width;
        let long = if long_is_height { height } else { width };
        let spacing = long / f64::from(n + 1);

        // Lines across the short direction at offset `t` along the long side
        let across = |t: f64| {
            if long_is_height {
                ((0.0, t), (width, t))
            } else {
                ((t, 0.0), (t, height))
            }
        };
        // Lines along the long direction at offset `t` across the short side
        let along = |t: f64| {
            if long_is_height {
                ((t, 0.0), (t, height))
            } else {
                ((0.0, t), (width, t))
            }
        };
        let short = if long_is_height { width } else { height };

        let line = |role: MemberRole, id: &str, (start, end): ((f64, f64), (f64, f64))| MemberLine {
            role,
            section_id: id.to_string(),
            start,
            end,
        };

        let mut members = Vec::with_capacity(n as usize + 4);
        for offset in [0.0, short] {
            members.push(line(MemberRole::Girder, config.girder.id(), along(offset)));
        }
        for offset in [0.0, long] {
            members.push(line(MemberRole::SideBeam, config.side_beam.id(), across(offset)));
        }

        let mut interior_ticks_ft = Vec::with_capacity(n as usize);
        for i in 1..=n {
            let offset = spacing * f64::from(i);
            members.push(line(MemberRole::InteriorBeam, config.interior_beam.id(), across(offset)));
            interior_ticks_ft.push((offset * 100.0).round() / 100.0);
        }

        BayLayout {
            width_ft: width,
            height_ft: height,
            members,
            interior_ticks_ft,
        }
    }

    /// Members with the given role
    pub fn members_with_role(&self, role: MemberRole) -> impl Iterator<Item = &MemberLine> {
        self.members.iter().filter(move |m| m.role == role)
    }
}
