use glam::{Vec2, Vec3, Vec4};

/// Maximum number of attribute slots carried by vertices and fragments.
pub const MAX_ATTRIBUTES: usize = 16;

/// Type tag of an attribute slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttributeType {
    #[default]
    Empty,
    Float,
    Vec2,
    Vec3,
    Vec4,
}

impl AttributeType {
    /// Number of f32 components.
    pub const fn components(self) -> usize {
        match self {
            AttributeType::Empty => 0,
            AttributeType::Float => 1,
            AttributeType::Vec2 => 2,
            AttributeType::Vec3 => 3,
            AttributeType::Vec4 => 4,
        }
    }

    /// Size in bytes inside a vertex buffer.
    pub const fn size(self) -> usize {
        self.components() * std::mem::size_of::<f32>()
    }
}

/// One attribute slot of a vertex or fragment record.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Attribute {
    #[default]
    Empty,
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
}

/// Fixed-capacity attribute array, indexed by slot number.
pub type Attributes = [Attribute; MAX_ATTRIBUTES];

impl Attribute {
    pub fn ty(&self) -> AttributeType {
        match self {
            Attribute::Empty => AttributeType::Empty,
            Attribute::Float(_) => AttributeType::Float,
            Attribute::Vec2(_) => AttributeType::Vec2,
            Attribute::Vec3(_) => AttributeType::Vec3,
            Attribute::Vec4(_) => AttributeType::Vec4,
        }
    }

    /// Widens the slot to four components, padding with zeros.
    pub fn to_vec4(&self) -> Vec4 {
        match *self {
            Attribute::Empty => Vec4::ZERO,
            Attribute::Float(v) => Vec4::new(v, 0.0, 0.0, 0.0),
            Attribute::Vec2(v) => v.extend(0.0).extend(0.0),
            Attribute::Vec3(v) => v.extend(0.0),
            Attribute::Vec4(v) => v,
        }
    }

    /// Narrows a four component value to the given type.
    pub fn from_vec4(ty: AttributeType, v: Vec4) -> Self {
        match ty {
            AttributeType::Empty => Attribute::Empty,
            AttributeType::Float => Attribute::Float(v.x),
            AttributeType::Vec2 => Attribute::Vec2(v.truncate().truncate()),
            AttributeType::Vec3 => Attribute::Vec3(v.truncate()),
            AttributeType::Vec4 => Attribute::Vec4(v),
        }
    }

    pub fn as_float(&self) -> f32 {
        self.to_vec4().x
    }

    pub fn as_vec2(&self) -> Vec2 {
        self.to_vec4().truncate().truncate()
    }

    pub fn as_vec3(&self) -> Vec3 {
        self.to_vec4().truncate()
    }

    pub fn as_vec4(&self) -> Vec4 {
        self.to_vec4()
    }
}

impl From<f32> for Attribute {
    fn from(v: f32) -> Self {
        Attribute::Float(v)
    }
}

impl From<Vec2> for Attribute {
    fn from(v: Vec2) -> Self {
        Attribute::Vec2(v)
    }
}

impl From<Vec3> for Attribute {
    fn from(v: Vec3) -> Self {
        Attribute::Vec3(v)
    }
}

impl From<Vec4> for Attribute {
    fn from(v: Vec4) -> Self {
        Attribute::Vec4(v)
    }
}
