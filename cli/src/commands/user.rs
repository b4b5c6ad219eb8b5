use primer_common::values::User;

use crate::terminal::print;

pub fn user(
    email: String,
    name: String,
    password: String,
    age: Option<i32>,
    height: Option<f64>,
) -> anyhow::Result<()> {
    let user: User = User::new(email, name, password, age, height);

    print::set_key_width(8);
    print::aligned_line("Email", user.email());
    print::aligned_line("Name", user.name());
    print::aligned_line("Password", "*".repeat(user.password().chars().count()));
    print::aligned_line("Age", or_unset(user.age()));
    print::aligned_line("Height", or_unset(user.height()));
    Ok(())
}

fn or_unset<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("unset"), |v| v.to_string())
}
