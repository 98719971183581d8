use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart axis a selectable field can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Label tag carried by clickable axis labels (`"x"` / `"y"`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }

    pub fn from_tag(tag: &str) -> ChartResult<Self> {
        match tag {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            other => Err(ChartError::InvalidData(format!(
                "unknown axis tag `{other}`"
            ))),
        }
    }

    /// Selectable fields in label display order.
    #[must_use]
    pub const fn fields(self) -> [Field; 3] {
        match self {
            Self::X => [Field::Poverty, Field::Age, Field::Income],
            Self::Y => [Field::Healthcare, Field::Obesity, Field::Smokes],
        }
    }

    #[must_use]
    pub const fn default_field(self) -> Field {
        match self {
            Self::X => Field::Poverty,
            Self::Y => Field::Healthcare,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Numeric dataset field selectable through an axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Poverty,
    Age,
    Income,
    Healthcare,
    Obesity,
    Smokes,
}

impl Field {
    pub const ALL: [Self; 6] = [
        Self::Poverty,
        Self::Age,
        Self::Income,
        Self::Healthcare,
        Self::Obesity,
        Self::Smokes,
    ];

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Poverty | Self::Age | Self::Income => Axis::X,
            Self::Healthcare | Self::Obesity | Self::Smokes => Axis::Y,
        }
    }

    /// CSV column name and label `data-name`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Poverty => "poverty",
            Self::Age => "age",
            Self::Income => "income",
            Self::Healthcare => "healthcare",
            Self::Obesity => "obesity",
            Self::Smokes => "smokes",
        }
    }

    /// Text drawn for the clickable axis label.
    #[must_use]
    pub const fn label_text(self) -> &'static str {
        match self {
            Self::Poverty => "In Poverty (%)",
            Self::Age => "Age (Median)",
            Self::Income => "Household Income (Median)",
            Self::Healthcare => "Lacks Healthcare (%)",
            Self::Obesity => "Obese (%)",
            Self::Smokes => "Smokers (%)",
        }
    }

    /// Prefix used by tooltip lines for this field.
    #[must_use]
    pub const fn tooltip_prefix(self) -> &'static str {
        match self {
            Self::Poverty => "% in Poverty: ",
            Self::Age => "Median Age: ",
            Self::Income => "Median Income: ",
            Self::Healthcare => "% Lacks Healthcare: ",
            Self::Obesity => "% Obese: ",
            Self::Smokes => "% Smokers: ",
        }
    }

    /// Resolves a label from its axis tag and field name.
    ///
    /// Fails with `UnknownLabel` when the name is not selectable on that axis.
    pub fn from_label(axis_tag: &str, name: &str) -> ChartResult<Self> {
        let axis = Axis::from_tag(axis_tag)?;
        axis.fields()
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| ChartError::UnknownLabel {
                axis,
                name: name.to_owned(),
            })
    }

    pub(crate) fn ensure_axis(self, axis: Axis) -> ChartResult<Self> {
        if self.axis() != axis {
            return Err(ChartError::FieldAxisMismatch { field: self, axis });
        }
        Ok(self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_belongs_to_its_axis_list() {
        for field in Field::ALL {
            assert!(field.axis().fields().contains(&field));
        }
    }

    #[test]
    fn from_label_rejects_field_of_other_axis() {
        let err = Field::from_label("x", "smokes").expect_err("smokes is a y field");
        assert!(matches!(err, ChartError::UnknownLabel { axis: Axis::X, .. }));
    }
}
