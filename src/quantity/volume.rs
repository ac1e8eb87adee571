quantity!(Liters, "L");
