mod dense;
