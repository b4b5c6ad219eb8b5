/// A plain mutable account record.
///
/// No setter validates its input: an empty email or a negative age is
/// stored as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    email: String,
    name: String,
    password: String,
    age: Option<i32>,
    height: Option<f64>,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
        age: Option<i32>,
        height: Option<f64>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password: password.into(),
            age,
            height,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn set_age(&mut self, age: Option<i32>) {
        self.age = age;
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn set_height(&mut self, height: Option<f64>) {
        self.height = height;
    }
}
